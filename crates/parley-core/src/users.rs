use parley_db::StoreError;
use tracing::warn;

use crate::error::CoreError;
use crate::session::Session;
use crate::validation;
use crate::{Core, UserSummary};

impl Core {
    /// Create an account. Validation runs before any store call; a
    /// duplicate email comes back as [`CoreError::DuplicateEmail`] from
    /// the store's unique constraint, leaving existing data untouched.
    ///
    /// All fields are trimmed first, so whitespace-padded input is
    /// equivalent to its trimmed form (and is stored trimmed).
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<(), CoreError> {
        let (name, email, password) = (name.trim(), email.trim(), password.trim());
        let phone = phone.map(str::trim);
        validation::validate_registration(name, email, password)?;

        let digest = parley_auth::hash_password(password)?;
        self.db
            .create_user(name, email, &digest, phone)
            .map_err(|e| match e {
                StoreError::UniqueViolation => CoreError::DuplicateEmail,
                other => CoreError::Store(other),
            })
    }

    /// Verify credentials and mint a [`Session`] the caller holds.
    ///
    /// Returns `None` for an unknown email and for a wrong password
    /// alike — the two cases are deliberately indistinguishable.
    /// Credentials are trimmed the same way `register` trims them.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<Session>, CoreError> {
        let (email, password) = (email.trim(), password.trim());
        let Some(user) = self.db.get_user_by_email(email)? else {
            return Ok(None);
        };

        if parley_auth::verify_password(password, &user.password_hash) {
            Ok(Some(Session::new(user.name, user.email)))
        } else {
            Ok(None)
        }
    }

    /// All users in registration order. Degrades to an empty listing if
    /// the store is unreachable; reads never fail the caller.
    pub fn list_users(&self) -> Vec<UserSummary> {
        match self.db.list_users() {
            Ok(rows) => rows
                .into_iter()
                .map(|(name, email)| UserSummary { name, email })
                .collect(),
            Err(e) => {
                warn!("user listing unavailable: {e}");
                Vec::new()
            }
        }
    }

    /// Email of the first user registered under this display name.
    /// Best-effort: names are not unique.
    pub fn email_for_name(&self, name: &str) -> Result<Option<String>, CoreError> {
        Ok(self.db.email_for_name(name)?)
    }
}
