#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::config::VOTING_CONFIG;
    use crate::models::VoteState;
    use crate::random::RandomSource;
    use crate::roster::{apply_live_update, seed_contestants};
    use crate::storage::{KeyValueStore, MemoryStore, StorageCell};
    use crate::voting::{MessageKind, VoteController, VoteOutcome};
    use crate::window::VotingWindow;

    /// Scripted randomness: replays a fixed sequence of rolls.
    struct SequenceSource {
        rolls: Vec<f64>,
        next: usize,
    }

    impl SequenceSource {
        fn new(rolls: &[f64]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for SequenceSource {
        fn roll(&mut self) -> f64 {
            let roll = self.rolls[self.next % self.rolls.len()];
            self.next += 1;
            roll
        }
    }

    const SUCCESS_ROLL: f64 = 0.95;
    const FAILURE_ROLL: f64 = 0.05;

    fn store() -> Rc<MemoryStore> {
        Rc::new(MemoryStore::new())
    }

    fn controller(store: &Rc<MemoryStore>, contestant_id: &str) -> VoteController {
        VoteController::load(
            Rc::clone(store) as Rc<dyn KeyValueStore>,
            contestant_id,
            VOTING_CONFIG,
        )
    }

    fn submit(controller: &mut VoteController, roll: f64, now_ms: i64) -> Option<VoteOutcome> {
        assert!(controller.begin());
        controller.resolve(roll, now_ms)
    }

    #[test]
    fn cell_returns_default_when_empty() {
        let store = store();
        let cell: StorageCell<VoteState> = StorageCell::load(
            Rc::clone(&store) as Rc<dyn KeyValueStore>,
            "vote_1",
            VoteState::new("1", 3),
        );
        assert_eq!(cell.get().votes_used, 0);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn cell_persists_and_reloads() {
        let store = store();
        let mut cell = StorageCell::load(
            Rc::clone(&store) as Rc<dyn KeyValueStore>,
            "slot",
            String::from("default"),
        );
        cell.set(String::from("written"));

        let reloaded: StorageCell<String> = StorageCell::load(
            Rc::clone(&store) as Rc<dyn KeyValueStore>,
            "slot",
            String::from("default"),
        );
        assert_eq!(reloaded.get(), "written");
    }

    #[test]
    fn cell_falls_back_on_read_failure() {
        let store = store();
        store.set("slot", "\"persisted\"").unwrap();
        store.fail_reads(true);

        let cell: StorageCell<String> = StorageCell::load(
            Rc::clone(&store) as Rc<dyn KeyValueStore>,
            "slot",
            String::from("default"),
        );
        assert_eq!(cell.get(), "default");
    }

    #[test]
    fn cell_falls_back_on_malformed_record() {
        let store = store();
        store.set("vote_1", "{not json").unwrap();

        let cell: StorageCell<VoteState> = StorageCell::load(
            Rc::clone(&store) as Rc<dyn KeyValueStore>,
            "vote_1",
            VoteState::new("1", 3),
        );
        assert_eq!(cell.get().votes_used, 0);
        assert!(cell.get().can_vote());
    }

    #[test]
    fn cell_write_failure_still_updates_memory() {
        let store = store();
        store.fail_writes(true);

        let mut cell = StorageCell::load(
            Rc::clone(&store) as Rc<dyn KeyValueStore>,
            "slot",
            String::from("default"),
        );
        cell.set(String::from("unpersisted"));

        assert_eq!(cell.get(), "unpersisted");
        store.fail_writes(false);
        assert_eq!(store.get("slot").unwrap(), None);
    }

    /// Tracing subscriber that counts error-level events.
    struct ErrorCount(Arc<AtomicUsize>);

    impl tracing::Subscriber for ErrorCount {
        fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
            *metadata.level() == tracing::Level::ERROR
        }

        fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, _event: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }

        fn enter(&self, _span: &tracing::span::Id) {}

        fn exit(&self, _span: &tracing::span::Id) {}
    }

    #[test]
    fn storage_failures_are_logged_not_thrown() {
        let errors = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(ErrorCount(Arc::clone(&errors)), || {
            // Read failure: recovered with the default, one error event.
            let store = store();
            store.fail_reads(true);
            let ctl = controller(&store, "1");
            assert!(ctl.can_vote());
            assert_eq!(errors.load(Ordering::Relaxed), 1);

            // Malformed record: same recovery, surfaced as its own error.
            store.fail_reads(false);
            store.set("vote_2", "{not json").unwrap();
            let ctl = controller(&store, "2");
            assert_eq!(ctl.votes_used(), 0);
            assert_eq!(errors.load(Ordering::Relaxed), 2);

            // Write failure: logged, in-memory state still advances.
            store.fail_writes(true);
            let mut ctl = controller(&store, "3");
            assert_eq!(submit(&mut ctl, SUCCESS_ROLL, 1000), Some(VoteOutcome::Success));
            assert_eq!(ctl.votes_used(), 1);
            assert_eq!(errors.load(Ordering::Relaxed), 3);
        });
    }

    #[test]
    fn cell_update_applies_function_of_previous() {
        let store = store();
        let mut cell = StorageCell::load(Rc::clone(&store) as Rc<dyn KeyValueStore>, "n", 1u32);
        cell.update(|n| n + 1);
        cell.update(|n| n * 10);
        assert_eq!(*cell.get(), 20);
    }

    #[test]
    fn three_votes_reach_the_limit_then_no_op() {
        let store = store();
        let mut ctl = controller(&store, "1");

        for n in 1..=3 {
            assert_eq!(submit(&mut ctl, SUCCESS_ROLL, 1000), Some(VoteOutcome::Success));
            assert_eq!(ctl.votes_used(), n);
            assert!(ctl.votes_used() <= ctl.max_votes());
        }
        assert!(!ctl.can_vote());
        assert_eq!(ctl.remaining_votes(), 0);

        let writes_before = store.write_count();
        assert!(!ctl.begin());
        assert_eq!(ctl.votes_used(), 3);
        assert_eq!(store.write_count(), writes_before);
    }

    #[test]
    fn failed_submission_changes_nothing() {
        let store = store();
        let mut ctl = controller(&store, "1");

        assert_eq!(submit(&mut ctl, FAILURE_ROLL, 1000), Some(VoteOutcome::Failure));
        assert_eq!(ctl.votes_used(), 0);
        assert!(ctl.can_vote());
        assert!(!ctl.is_submitting());
        assert_eq!(store.write_count(), 0);
        assert_eq!(ctl.message().unwrap().kind, MessageKind::Failure);
    }

    #[test]
    fn submission_in_flight_rejects_another() {
        let store = store();
        let mut ctl = controller(&store, "1");

        assert!(ctl.begin());
        assert!(ctl.is_submitting());
        assert!(!ctl.begin());

        assert_eq!(ctl.resolve(SUCCESS_ROLL, 1000), Some(VoteOutcome::Success));
        assert_eq!(ctl.votes_used(), 1);
        // Nothing left in flight to resolve.
        assert_eq!(ctl.resolve(SUCCESS_ROLL, 2000), None);
        assert_eq!(ctl.votes_used(), 1);
    }

    #[test]
    fn success_persists_a_matching_record() {
        let store = store();
        let mut ctl = controller(&store, "1");

        submit(&mut ctl, SUCCESS_ROLL, 42_000);

        let raw = store.get("vote_1").unwrap().expect("record written");
        let persisted: VoteState = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.votes_used, ctl.votes_used());
        assert_eq!(persisted.contestant_id, "1");
        assert_eq!(persisted.last_vote_time, Some(42_000));
    }

    #[test]
    fn persisted_record_uses_the_frozen_field_names() {
        let state = VoteState {
            contestant_id: "1".into(),
            votes_used: 2,
            max_votes: 3,
            last_vote_time: Some(1234),
        };
        let raw = serde_json::to_string(&state).unwrap();
        assert_eq!(
            raw,
            "{\"contestantId\":\"1\",\"votesUsed\":2,\"maxVotes\":3,\"lastVoteTime\":1234}"
        );
    }

    #[test]
    fn contestants_are_isolated() {
        let store = store();
        let mut first = controller(&store, "1");
        let mut second = controller(&store, "2");

        submit(&mut first, SUCCESS_ROLL, 1000);
        submit(&mut first, SUCCESS_ROLL, 2000);

        assert_eq!(first.votes_used(), 2);
        assert_eq!(second.votes_used(), 0);
        assert!(second.can_vote());

        // An in-flight submission for one contestant does not block another.
        assert!(first.begin());
        assert!(second.begin());
        second.resolve(SUCCESS_ROLL, 3000);
        first.resolve(SUCCESS_ROLL, 3000);
        assert_eq!(first.votes_used(), 3);
        assert_eq!(second.votes_used(), 1);
    }

    #[test]
    fn reinitialization_reproduces_persisted_state() {
        let store = store();
        {
            let mut ctl = controller(&store, "1");
            submit(&mut ctl, SUCCESS_ROLL, 1000);
            submit(&mut ctl, SUCCESS_ROLL, 2000);
        }

        let reloaded = controller(&store, "1");
        assert_eq!(reloaded.votes_used(), 2);
        assert_eq!(reloaded.remaining_votes(), 1);
        assert!(reloaded.can_vote());
        assert!(!reloaded.is_submitting());
    }

    #[test]
    fn preseeded_max_record_blocks_voting_immediately() {
        let store = store();
        store
            .set(
                "vote_1",
                "{\"contestantId\":\"1\",\"votesUsed\":3,\"maxVotes\":3,\"lastVoteTime\":99000}",
            )
            .unwrap();

        let mut ctl = controller(&store, "1");
        assert!(!ctl.can_vote());
        assert_eq!(ctl.remaining_votes(), 0);
        assert_eq!(ctl.state().last_vote_time, Some(99_000));
        assert!(!ctl.begin());
    }

    #[test]
    fn read_failure_yields_default_vote_state() {
        let store = store();
        store.fail_reads(true);

        let ctl = controller(&store, "1");
        assert_eq!(ctl.votes_used(), 0);
        assert!(ctl.can_vote());
    }

    #[test]
    fn over_limit_record_is_clamped_without_a_write() {
        let store = store();
        let raw = "{\"contestantId\":\"1\",\"votesUsed\":7,\"maxVotes\":3,\"lastVoteTime\":null}";
        store.set("vote_1", raw).unwrap();
        let writes_before = store.write_count();

        let ctl = controller(&store, "1");
        assert_eq!(ctl.votes_used(), 3);
        assert!(!ctl.can_vote());
        // The repair stays in memory; the persisted record is untouched.
        assert_eq!(store.write_count(), writes_before);
        assert_eq!(store.get("vote_1").unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn message_durations_favor_failures() {
        let store = store();
        let mut ctl = controller(&store, "1");

        submit(&mut ctl, SUCCESS_ROLL, 1000);
        let success_expiry = ctl.message().unwrap().expires_at;

        submit(&mut ctl, FAILURE_ROLL, 1000);
        let failure_expiry = ctl.message().unwrap().expires_at;

        assert!(failure_expiry > success_expiry);
    }

    #[test]
    fn messages_expire_on_schedule() {
        let store = store();
        let mut ctl = controller(&store, "1");

        submit(&mut ctl, SUCCESS_ROLL, 1000);
        let expires_at = ctl.message().unwrap().expires_at;
        assert_eq!(expires_at, 1000 + i64::from(VOTING_CONFIG.success_message_ms));

        ctl.expire_message(expires_at - 1);
        assert!(ctl.message().is_some());
        ctl.expire_message(expires_at);
        assert!(ctl.message().is_none());
    }

    #[test]
    fn beginning_a_submission_clears_the_previous_message() {
        let store = store();
        let mut ctl = controller(&store, "1");

        submit(&mut ctl, FAILURE_ROLL, 1000);
        assert!(ctl.message().is_some());
        assert!(ctl.begin());
        assert!(ctl.message().is_none());
    }

    #[test]
    fn window_expires_clamped_to_zero() {
        let mut window = VotingWindow::open(0, 300_000);
        assert!(window.is_active);
        assert_eq!(window.end_time, 300_000);

        window.tick(400_000);
        assert!(!window.is_active);
        assert_eq!(window.remaining_ms, 0);
        assert_eq!(window.formatted_time(), "0:00");
    }

    #[test]
    fn window_formats_minutes_and_padded_seconds() {
        let mut window = VotingWindow::open(0, 300_000);
        assert_eq!(window.formatted_time(), "5:00");

        window.tick(65_000);
        assert!(window.is_active);
        assert_eq!(window.formatted_time(), "3:55");

        window.tick(291_500);
        assert_eq!(window.formatted_time(), "0:08");
    }

    #[test]
    fn window_never_reactivates() {
        let mut window = VotingWindow::open(0, 300_000);
        window.tick(300_000);
        assert!(!window.is_active);

        // A stale tick from before the close must not reopen it.
        window.tick(100_000);
        assert!(!window.is_active);
        assert_eq!(window.remaining_ms, 0);
    }

    #[test]
    fn live_update_deltas_are_bounded_and_independent() {
        let mut contestants = seed_contestants();
        let before: Vec<u64> = contestants.iter().map(|c| c.votes).collect();
        let mut rng = SequenceSource::new(&[0.0, 0.2, 0.4, 0.6, 0.8, 0.999]);

        apply_live_update(&mut contestants, &mut rng, VOTING_CONFIG.live_update_delta_range);

        let deltas: Vec<u64> = contestants
            .iter()
            .zip(&before)
            .map(|(c, b)| c.votes - b)
            .collect();
        assert_eq!(deltas, vec![0, 1, 2, 3, 4, 4]);
        assert_eq!(contestants[0].name, "Sarah Chen");
        assert_eq!(contestants[5].id, "6");
    }

    #[test]
    fn seed_roster_ids_are_unique_and_ordered() {
        let contestants = seed_contestants();
        let ids: Vec<&str> = contestants.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }
}
