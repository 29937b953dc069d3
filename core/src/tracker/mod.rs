//! Tracking session state machine.
//!
//! Two modes, gated by a single flag: stopped and tracking. Every stimulus
//! handler is a no-op while stopped; `begin_tracking` and `end_tracking` are
//! the only transitions between the modes. Transition functions mutate
//! [`TrackerState`](crate::session::TrackerState) and return the signals to
//! dispatch.

pub mod lifecycle;


pub use lifecycle::{advance_tick, begin_tracking, end_tracking, record_stat_change};
