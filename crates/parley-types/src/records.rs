use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the public user listing. Never carries the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

/// A chat entry as returned by bounded retrieval, oldest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub user_name: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

/// Profile view for a registered user. `bio` and `join_date` are `None`
/// when the user has never saved a profile row (left-join semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub join_date: Option<DateTime<Utc>>,
}
