use crate::voting::MessageKind;

/// Build-time voting parameters. Not externally configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VotingConfig {
    pub max_votes_per_contestant: u32,
    pub vote_submission_delay_ms: u32,
    pub failure_rate: f64,
    pub update_interval_ms: u32,
    pub updating_flash_ms: u32,
    pub voting_duration_ms: i64,
    pub success_message_ms: u32,
    pub failure_message_ms: u32,
    pub live_update_delta_range: u32,
}

impl VotingConfig {
    pub const fn new() -> Self {
        Self {
            max_votes_per_contestant: 3,
            vote_submission_delay_ms: 500,
            failure_rate: 0.10,
            update_interval_ms: 2000,
            updating_flash_ms: 500,
            voting_duration_ms: 300_000,
            success_message_ms: 3000,
            failure_message_ms: 5000,
            live_update_delta_range: 5,
        }
    }

    /// Failure messages stay on screen longer than success messages.
    pub const fn message_display_ms(&self, kind: MessageKind) -> u32 {
        match kind {
            MessageKind::Success => self.success_message_ms,
            MessageKind::Failure => self.failure_message_ms,
        }
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub const VOTING_CONFIG: VotingConfig = VotingConfig::new();
