use std::rc::Rc;

use crate::config::VotingConfig;
use crate::models::VoteState;
use crate::storage::{KeyValueStore, StorageCell};

pub const SUCCESS_MESSAGE: &str = "Vote submitted successfully! ✓";
pub const FAILURE_MESSAGE: &str = "Vote submission failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Failure,
}

/// Transient feedback shown after a submission resolves. Expires after a
/// kind-dependent display duration.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteMessage {
    pub text: String,
    pub kind: MessageKind,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Success,
    Failure,
}

/// Per-contestant vote-submission state machine over a persistent cell.
///
/// A submission is accepted only while votes remain and none is in flight;
/// everything else is a no-op. The simulated submission itself is driven by
/// the caller: `begin` opens the in-flight window, and after the configured
/// delay the caller feeds a random draw into `resolve`, which either records
/// the vote (write-through to storage) or reports the failure. Controllers
/// for different contestants touch disjoint storage keys and never interact.
pub struct VoteController {
    cell: StorageCell<VoteState>,
    config: VotingConfig,
    submitting: bool,
    message: Option<VoteMessage>,
}

impl VoteController {
    pub fn load(store: Rc<dyn KeyValueStore>, contestant_id: &str, config: VotingConfig) -> Self {
        let default = VoteState::new(contestant_id, config.max_votes_per_contestant);
        let mut cell = StorageCell::load(store, VoteState::storage_key(contestant_id), default);
        if cell.get().votes_used > cell.get().max_votes {
            // Persisted record violates the vote bound; clamp in memory only.
            let mut clamped = cell.get().clone();
            clamped.votes_used = clamped.max_votes;
            cell.replace_local(clamped);
        }
        Self {
            cell,
            config,
            submitting: false,
            message: None,
        }
    }

    pub fn state(&self) -> &VoteState {
        self.cell.get()
    }

    pub fn votes_used(&self) -> u32 {
        self.cell.get().votes_used
    }

    pub fn max_votes(&self) -> u32 {
        self.cell.get().max_votes
    }

    pub fn remaining_votes(&self) -> u32 {
        self.cell.get().remaining_votes()
    }

    pub fn can_vote(&self) -> bool {
        self.cell.get().can_vote()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&VoteMessage> {
        self.message.as_ref()
    }

    /// Starts a submission. Returns false (and changes nothing) when the vote
    /// limit is reached or another submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.submitting || !self.can_vote() {
            return false;
        }
        self.submitting = true;
        self.message = None;
        true
    }

    /// Resolves the in-flight submission with a uniform draw in `[0, 1)`.
    /// Draws below the failure rate fail without touching any state; otherwise
    /// exactly one vote is recorded and written through. Returns `None` when
    /// no submission is in flight.
    pub fn resolve(&mut self, roll: f64, now_ms: i64) -> Option<VoteOutcome> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;

        if roll < self.config.failure_rate {
            self.message = Some(self.transient_message(MessageKind::Failure, now_ms));
            return Some(VoteOutcome::Failure);
        }

        self.cell.update(|state| {
            let mut next = state.clone();
            next.record_vote(now_ms);
            next
        });
        self.message = Some(self.transient_message(MessageKind::Success, now_ms));
        Some(VoteOutcome::Success)
    }

    /// Clears the transient message once its display duration has elapsed.
    pub fn expire_message(&mut self, now_ms: i64) {
        if self
            .message
            .as_ref()
            .is_some_and(|message| now_ms >= message.expires_at)
        {
            self.message = None;
        }
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    fn transient_message(&self, kind: MessageKind, now_ms: i64) -> VoteMessage {
        let text = match kind {
            MessageKind::Success => SUCCESS_MESSAGE,
            MessageKind::Failure => FAILURE_MESSAGE,
        };
        VoteMessage {
            text: text.to_owned(),
            kind,
            expires_at: now_ms + i64::from(self.config.message_display_ms(kind)),
        }
    }
}
