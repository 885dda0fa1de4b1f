pub mod config;
pub mod error;
pub mod models;
pub mod random;
pub mod roster;
pub mod storage;
pub mod voting;
pub mod window;

pub use config::{VotingConfig, VOTING_CONFIG};
pub use error::{Error, Result};
pub use models::*;
pub use random::{FastrandSource, RandomSource};
pub use roster::{apply_live_update, seed_contestants};
pub use storage::{KeyValueStore, MemoryStore, StorageCell};
pub use voting::{MessageKind, VoteController, VoteMessage, VoteOutcome};
pub use window::VotingWindow;

#[cfg(test)]
mod tests;
