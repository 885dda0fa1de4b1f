use serde::{Deserialize, Serialize};

/// A voting candidate with a display profile and a live tally. Only `votes`
/// changes during a session, via the simulated live updater.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub votes: u64,
    pub description: String,
}

/// Per-contestant record of the votes a user has cast, persisted under
/// `"vote_" + contestantId`. The serialized shape is frozen for compatibility
/// with already-persisted data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteState {
    pub contestant_id: String,
    pub votes_used: u32,
    pub max_votes: u32,
    pub last_vote_time: Option<i64>,
}

impl VoteState {
    pub fn new(contestant_id: impl Into<String>, max_votes: u32) -> Self {
        Self {
            contestant_id: contestant_id.into(),
            votes_used: 0,
            max_votes,
            last_vote_time: None,
        }
    }

    pub fn storage_key(contestant_id: &str) -> String {
        format!("vote_{contestant_id}")
    }

    pub fn can_vote(&self) -> bool {
        self.votes_used < self.max_votes
    }

    pub fn remaining_votes(&self) -> u32 {
        self.max_votes.saturating_sub(self.votes_used)
    }

    pub fn record_vote(&mut self, now_ms: i64) {
        self.votes_used += 1;
        self.last_vote_time = Some(now_ms);
    }
}
