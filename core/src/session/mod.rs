pub mod state;
pub mod summary;

pub use state::{NO_AMMO_LABEL, TrackerState};
pub use summary::{SkillXpGain, TrackerSummary};
