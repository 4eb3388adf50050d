/// Database row types — these map directly to SQLite rows.
/// Distinct from the parley-types records so the store layer stays
/// independent of the public surface.

pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
}

pub struct MessageRow {
    pub id: i64,
    pub user_name: String,
    pub body: String,
    pub created_at: String,
}

/// Result of the users-to-profiles left join. `bio` and `join_date` are
/// `None` when no profile row exists for the user.
pub struct ProfileRow {
    pub name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub join_date: Option<String>,
}
