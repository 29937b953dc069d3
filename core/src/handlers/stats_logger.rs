use crate::events::{SignalHandler, TrackerSignal};

/// Logs stat updates and resupplies as they happen.
///
/// Reference [`SignalHandler`] implementation; the replay harness registers
/// it so a session leaves a trace without any panel attached. Lifecycle
/// transitions are already logged at the transition site.
#[derive(Debug, Default)]
pub struct StatsLogger;

impl StatsLogger {
    pub fn new() -> Self {
        Self
    }
}

impl SignalHandler for StatsLogger {
    fn handle_signal(&mut self, signal: &TrackerSignal) {
        match signal {
            TrackerSignal::ResupplyDetected { new_count, .. } => {
                tracing::info!(new_count, "ammo resupplied, consumption interval restarted");
            }
            TrackerSignal::StatsUpdated { summary, .. } => {
                tracing::debug!(
                    ammo = %summary.ammo_label,
                    remaining = summary.current_ammo_count,
                    used = summary.ammo_used,
                    gained = summary.total_xp_gained,
                    avg = summary.avg_xp_per_ammo,
                    "stats updated"
                );
            }
            _ => {}
        }
    }
}
