pub mod client;
pub mod config;
pub mod events;
pub mod handlers;
pub mod session;
pub mod tracker;

// Re-exports for convenience
pub use client::{AmmoSlot, ClientError, GameClient, ItemId};
pub use config::TrackerConfig;
pub use events::{EventProcessor, SignalHandler, TrackerSignal};
pub use session::{TrackerState, TrackerSummary};
