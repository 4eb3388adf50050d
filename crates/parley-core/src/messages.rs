use tracing::warn;

use crate::error::CoreError;
use crate::time::parse_store_timestamp;
use crate::{ChatMessage, Core};

impl Core {
    /// Append a chat entry. Empty or whitespace-only bodies are rejected
    /// before the store is touched; the store assigns the timestamp at
    /// write time. The body is stored trimmed, as the original app did.
    pub fn append_message(&self, sender_name: &str, body: &str) -> Result<(), CoreError> {
        crate::validation::validate_body(body)?;
        Ok(self.db.insert_message(sender_name, body.trim())?)
    }

    /// The `limit` most recent messages, oldest-first. Same-second
    /// writes keep insertion order. Degrades to empty when the store is
    /// unreachable; reads never fail the caller.
    ///
    /// A row whose stored timestamp no longer parses is kept rather
    /// than dropped: it comes back with the Unix epoch as a sentinel
    /// timestamp, and the corruption is logged.
    pub fn recent_messages(&self, limit: u32) -> Vec<ChatMessage> {
        let rows = match self.db.recent_messages(limit) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("message log unavailable: {e}");
                return Vec::new();
            }
        };

        rows.into_iter()
            .map(|row| {
                let timestamp = parse_store_timestamp(&row.created_at).unwrap_or_else(|| {
                    warn!("corrupt timestamp '{}' on message {}", row.created_at, row.id);
                    Default::default()
                });
                ChatMessage {
                    user_name: row.user_name,
                    body: row.body,
                    timestamp,
                }
            })
            .collect()
    }
}
