//! Operation surface of the parley persistence and session core.
//!
//! The presentation layer (GUI, CLI, whatever drives it) calls plain
//! methods on [`Core`] and owns any [`Session`] it gets back; the core
//! keeps no login state between calls. Live-chat updates are the
//! caller's concern: poll [`Core::recent_messages`] on your own cadence,
//! there is no push mechanism.

pub mod error;
pub mod session;
pub mod validation;

mod messages;
mod profiles;
mod time;
mod users;

use std::path::Path;

use parley_db::Database;

pub use error::{CoreError, ValidationError};
pub use parley_types::{ChatMessage, ProfileView, UserSummary};
pub use session::{Session, SessionState};

/// Default window for bounded message retrieval.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 50;

pub struct Core {
    db: Database,
}

impl Core {
    /// Open (creating if needed) the backing database and run migrations.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }

    /// In-memory core, used by tests.
    pub fn open_in_memory() -> Result<Self, CoreError> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }
}
