//! Routes host stimuli through the state machine and fans signals out to
//! registered handlers.

use quiver_types::CombatSkill;

use crate::client::GameClient;
use crate::config::TrackerConfig;
use crate::session::{TrackerState, TrackerSummary};
use crate::tracker;

use super::{SignalHandler, TrackerSignal};

/// Owns the tracker state and the registered signal handlers.
///
/// The host binding calls the `handle_*` methods from its callbacks; the
/// presentation layer calls `start_tracking`/`stop_tracking` as user
/// actions. Everything runs synchronously on the calling thread.
pub struct EventProcessor {
    state: TrackerState,
    tracked_skills: Vec<CombatSkill>,
    signal_handlers: Vec<Box<dyn SignalHandler + Send>>,
}

impl EventProcessor {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            state: TrackerState::new(),
            tracked_skills: config.tracked_skills().to_vec(),
            signal_handlers: Vec::new(),
        }
    }

    /// Register a signal handler to receive tracker signals.
    pub fn add_signal_handler(&mut self, handler: Box<dyn SignalHandler + Send>) {
        self.signal_handlers.push(handler);
    }

    /// Begin tracking. If the client is unavailable the attempt is logged
    /// and abandoned; the tracker stays stopped.
    pub fn start_tracking<C: GameClient>(&mut self, client: &C) {
        match tracker::begin_tracking(&mut self.state, client, &self.tracked_skills) {
            Ok(signals) => self.dispatch_signals(&signals),
            Err(e) => {
                tracing::warn!(error = %e, "tracking start abandoned, client unavailable");
            }
        }
    }

    /// Stop tracking and reset all statistics. Idempotent.
    pub fn stop_tracking(&mut self) {
        let signals = tracker::end_tracking(&mut self.state);
        self.dispatch_signals(&signals);
    }

    /// Periodic tick from the host.
    pub fn handle_tick<C: GameClient>(&mut self, client: &C) {
        let signals = tracker::advance_tick(&mut self.state, client);
        self.dispatch_signals(&signals);
    }

    /// Skill-experience-changed notification from the host.
    pub fn handle_stat_change(&mut self, skill: CombatSkill, experience: i64) {
        let signals = tracker::record_stat_change(&mut self.state, skill, experience);
        self.dispatch_signals(&signals);
    }

    // --- Accessors ---

    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking()
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn summary(&self) -> TrackerSummary {
        TrackerSummary::from_state(&self.state)
    }

    fn dispatch_signals(&mut self, signals: &[TrackerSignal]) {
        if signals.is_empty() {
            return;
        }
        for handler in &mut self.signal_handlers {
            handler.handle_signals(signals);
        }
    }
}

impl Default for EventProcessor {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AmmoSlot, ClientError, ItemId};
    use std::collections::HashMap;

    struct StubClient {
        experience: HashMap<CombatSkill, i64>,
        ammo: Option<AmmoSlot>,
    }

    impl GameClient for StubClient {
        fn skill_experience(&self, skill: CombatSkill) -> Result<i64, ClientError> {
            Ok(self.experience.get(&skill).copied().unwrap_or(0))
        }

        fn ammo_slot(&self) -> Result<Option<AmmoSlot>, ClientError> {
            Ok(self.ammo)
        }

        fn item_name(&self, item_id: ItemId) -> Result<String, ClientError> {
            Err(ClientError::UnknownItem(item_id))
        }
    }

    #[derive(Default)]
    struct RecordingHandler {
        seen: Vec<&'static str>,
    }

    impl SignalHandler for RecordingHandler {
        fn handle_signal(&mut self, signal: &TrackerSignal) {
            self.seen.push(match signal {
                TrackerSignal::TrackingStarted { .. } => "started",
                TrackerSignal::TrackingStopped { .. } => "stopped",
                TrackerSignal::ResupplyDetected { .. } => "resupply",
                TrackerSignal::StatsUpdated { .. } => "stats",
            });
        }
    }

    // Handlers are boxed away, so observe dispatch through a shared log.
    struct SharedHandler(std::sync::Arc<std::sync::Mutex<RecordingHandler>>);

    impl SignalHandler for SharedHandler {
        fn handle_signal(&mut self, signal: &TrackerSignal) {
            if let Ok(mut inner) = self.0.lock() {
                inner.handle_signal(signal);
            }
        }
    }

    #[test]
    fn test_signals_reach_registered_handlers() {
        let log = std::sync::Arc::new(std::sync::Mutex::new(RecordingHandler::default()));
        let mut processor = EventProcessor::default();
        processor.add_signal_handler(Box::new(SharedHandler(log.clone())));

        let client = StubClient { experience: HashMap::new(), ammo: None };
        processor.start_tracking(&client);
        processor.stop_tracking();

        let seen = log.lock().unwrap().seen.clone();
        assert_eq!(seen, vec!["started", "stats", "stopped", "stats"]);
    }

    #[test]
    fn test_ranged_only_config_ignores_other_skills() {
        let config = TrackerConfig { track_all_combat_xp: false, ..Default::default() };
        let mut processor = EventProcessor::new(&config);

        let mut experience = HashMap::new();
        experience.insert(CombatSkill::Ranged, 1_000);
        experience.insert(CombatSkill::Magic, 2_000);
        let client = StubClient { experience, ammo: None };

        processor.start_tracking(&client);
        processor.handle_stat_change(CombatSkill::Magic, 2_500);
        assert_eq!(processor.state().total_xp_gained(), 0);

        processor.handle_stat_change(CombatSkill::Ranged, 1_040);
        assert_eq!(processor.state().total_xp_gained(), 40);
    }

    #[test]
    fn test_start_abandoned_when_client_fails() {
        struct DownClient;
        impl GameClient for DownClient {
            fn skill_experience(&self, _: CombatSkill) -> Result<i64, ClientError> {
                Err(ClientError::Unavailable("not logged in".into()))
            }
            fn ammo_slot(&self) -> Result<Option<AmmoSlot>, ClientError> {
                Err(ClientError::Unavailable("not logged in".into()))
            }
            fn item_name(&self, item_id: ItemId) -> Result<String, ClientError> {
                Err(ClientError::UnknownItem(item_id))
            }
        }

        let mut processor = EventProcessor::default();
        processor.start_tracking(&DownClient);
        assert!(!processor.is_tracking());
    }
}
