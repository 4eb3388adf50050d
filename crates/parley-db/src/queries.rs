use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{MessageRow, ProfileRow, UserRow};
use crate::{Database, StoreError};

impl Database {
    // -- Users --

    /// Insert a new user. A duplicate email surfaces as
    /// `StoreError::UniqueViolation` from the constraint itself — there
    /// is no pre-check, so two racing registrations cannot both win.
    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        phone: Option<&str>,
    ) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (name, email, password_hash, phone) VALUES (?1, ?2, ?3, ?4)",
                params![name, email, password_hash, phone],
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StoreError> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }

    /// All users in insertion order, full scan.
    pub fn list_users(&self) -> Result<Vec<(String, String)>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT name, email FROM users ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// First user with the given display name, by insertion order.
    /// Names are not unique, so this is best-effort.
    pub fn email_for_name(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.with_conn(|conn| {
            let email = conn
                .query_row(
                    "SELECT email FROM users WHERE name = ?1 ORDER BY id LIMIT 1",
                    [name],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(email)
        })
    }

    // -- Messages --

    /// Append a chat entry. The timestamp comes from the store's own
    /// clock (`datetime('now')`), not the caller.
    pub fn insert_message(&self, user_name: &str, body: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (user_name, body) VALUES (?1, ?2)",
                params![user_name, body],
            )?;
            Ok(())
        })
    }

    /// The most recent `limit` messages, returned oldest-first.
    /// Ties on `created_at` (same-second writes) break by rowid, so the
    /// order is stable under SQLite's one-second timestamp resolution.
    pub fn recent_messages(&self, limit: u32) -> Result<Vec<MessageRow>, StoreError> {
        self.with_conn(|conn| query_recent_messages(conn, limit))
    }

    // -- Profiles --

    /// Insert-or-update the bio for a user's profile row. The conflict
    /// clause only touches `bio`, so the first write's `join_date`
    /// survives later edits. Fails with `ForeignKeyViolation` when no
    /// user has this email.
    pub fn upsert_bio(&self, email: &str, bio: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO profiles (email, bio) VALUES (?1, ?2)
                 ON CONFLICT(email) DO UPDATE SET bio = excluded.bio",
                params![email, bio],
            )?;
            Ok(())
        })
    }

    /// Left join users to profiles by email. `None` only when the email
    /// resolves to no user; a user without a profile row still yields a
    /// row with empty bio and join date.
    pub fn get_profile(&self, email: &str) -> Result<Option<ProfileRow>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT u.name, u.phone, p.bio, p.join_date
                     FROM users u
                     LEFT JOIN profiles p ON p.email = u.email
                     WHERE u.email = ?1",
                    [email],
                    |row| {
                        Ok(ProfileRow {
                            name: row.get(0)?,
                            phone: row.get(1)?,
                            bio: row.get(2)?,
                            join_date: row.get(3)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT id, name, email, password_hash, phone FROM users WHERE email = ?1")?;

    let row = stmt
        .query_row([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password_hash: row.get(3)?,
                phone: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_recent_messages(conn: &Connection, limit: u32) -> Result<Vec<MessageRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_name, body, created_at
         FROM messages
         ORDER BY created_at DESC, id DESC
         LIMIT ?1",
    )?;

    let mut rows = stmt
        .query_map([limit], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                user_name: row.get(1)?,
                body: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    // Newest-first from the query, oldest-first for the caller.
    rows.reverse();
    Ok(rows)
}
