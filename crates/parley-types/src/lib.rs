pub mod records;

pub use records::{ChatMessage, ProfileView, UserSummary};
