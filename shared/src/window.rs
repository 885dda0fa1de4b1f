/// The time-bounded period during which votes are accepted. Session-only,
/// never persisted; once it closes it stays closed.
#[derive(Debug, Clone, PartialEq)]
pub struct VotingWindow {
    pub start_time: i64,
    pub end_time: i64,
    pub remaining_ms: i64,
    pub is_active: bool,
}

impl VotingWindow {
    pub fn open(now_ms: i64, duration_ms: i64) -> Self {
        Self {
            start_time: now_ms,
            end_time: now_ms + duration_ms,
            remaining_ms: duration_ms,
            is_active: true,
        }
    }

    /// Recomputes the remaining time, clamping at zero and deactivating the
    /// window once it runs out.
    pub fn tick(&mut self, now_ms: i64) {
        if !self.is_active {
            return;
        }
        let remaining = self.end_time - now_ms;
        if remaining <= 0 {
            self.remaining_ms = 0;
            self.is_active = false;
        } else {
            self.remaining_ms = remaining;
        }
    }

    /// Remaining time as `M:SS`, seconds zero-padded.
    pub fn formatted_time(&self) -> String {
        let minutes = self.remaining_ms / 60_000;
        let seconds = (self.remaining_ms % 60_000) / 1000;
        format!("{minutes}:{seconds:02}")
    }
}
