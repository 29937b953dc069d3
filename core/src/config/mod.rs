//! User configuration, persisted in the platform config directory.

use quiver_types::CombatSkill;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_NAME: &str = "quiver";

/// Skills tracked when `track_all_combat_xp` is disabled.
const RANGED_ONLY: [CombatSkill; 1] = [CombatSkill::Ranged];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Track experience from all five combat skills instead of Ranged only.
    pub track_all_combat_xp: bool,
    /// Swap `.` and `,` in formatted numbers.
    pub european_number_format: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { track_all_combat_xp: true, european_number_format: false }
    }
}

impl TrackerConfig {
    /// Load the persisted configuration, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load configuration, using defaults");
                Self::default()
            }
        }
    }

    pub fn store(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    /// The combat skills whose experience feeds the tracker.
    /// Fixed for the lifetime of a tracking session.
    pub fn tracked_skills(&self) -> &'static [CombatSkill] {
        if self.track_all_combat_xp { &CombatSkill::ALL } else { &RANGED_ONLY }
    }
}

/// Errors that can occur while persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to persist configuration: {0}")]
    Store(#[from] confy::ConfyError),
}
