use chrono::NaiveDateTime;

use crate::session::TrackerSummary;

/// Signals emitted by the EventProcessor for cross-cutting concerns.
/// These represent "interesting things that happened" at a higher level
/// than the raw host callbacks.
#[derive(Debug, Clone)]
pub enum TrackerSignal {
    // Session lifecycle
    TrackingStarted {
        timestamp: NaiveDateTime,
    },
    TrackingStopped {
        timestamp: NaiveDateTime,
    },

    /// The ammunition slot held more ammo than the previous poll; the
    /// consumption interval restarted from the new count.
    ResupplyDetected {
        new_count: i64,
        timestamp: NaiveDateTime,
    },

    /// Statistics changed. Carries a snapshot so presentation handlers
    /// never reach back into live state.
    StatsUpdated {
        summary: TrackerSummary,
        timestamp: NaiveDateTime,
    },
}
