use parley_db::StoreError;
use tracing::warn;

use crate::error::CoreError;
use crate::time::parse_store_timestamp;
use crate::{Core, ProfileView};

impl Core {
    /// Profile for a registered email, or `None` when no such user.
    /// A user who never saved a bio still gets a view, with `bio` and
    /// `join_date` empty.
    pub fn get_profile(&self, email: &str) -> Result<Option<ProfileView>, CoreError> {
        let Some(row) = self.db.get_profile(email)? else {
            return Ok(None);
        };

        let join_date = row.join_date.and_then(|raw| {
            let parsed = parse_store_timestamp(&raw);
            if parsed.is_none() {
                warn!("corrupt join_date '{}' for {}", raw, email);
            }
            parsed
        });

        Ok(Some(ProfileView {
            name: row.name,
            phone: row.phone,
            bio: row.bio,
            join_date,
        }))
    }

    /// Insert-or-update the bio, keyed on email. Idempotent: needs no
    /// pre-existing profile row, and a later save overwrites the bio
    /// while keeping the original `join_date`. Fails with
    /// [`CoreError::NotFound`] when the email resolves to no user.
    pub fn upsert_bio(&self, email: &str, bio: &str) -> Result<(), CoreError> {
        self.db.upsert_bio(email, bio).map_err(|e| match e {
            StoreError::ForeignKeyViolation => CoreError::NotFound,
            other => CoreError::Store(other),
        })
    }
}
