//! Serializable read-model for presentation layers.
//!
//! Panels and overlays consume summaries rather than the live state, so the
//! contract stays stable (and serializable) even if internal storage changes.

use chrono::NaiveDateTime;
use quiver_types::CombatSkill;
use serde::{Deserialize, Serialize};

use super::TrackerState;

/// Experience gained for a single tracked skill since tracking started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillXpGain {
    pub skill: CombatSkill,
    pub gained: i64,
}

/// Snapshot of the tracker statistics at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSummary {
    pub tracking: bool,
    pub started_at: Option<NaiveDateTime>,
    pub ammo_label: String,
    pub initial_ammo_count: i64,
    pub current_ammo_count: i64,
    pub ammo_used: i64,
    pub total_xp_gained: i64,
    pub avg_xp_per_ammo: f64,
    /// Per-skill breakdown, in canonical skill order, tracked skills only.
    pub skill_xp_gained: Vec<SkillXpGain>,
}

impl TrackerSummary {
    pub fn from_state(state: &TrackerState) -> Self {
        let skill_xp_gained = state
            .tracked_skills()
            .map(|skill| SkillXpGain { skill, gained: state.xp_gained(skill) })
            .collect();

        Self {
            tracking: state.is_tracking(),
            started_at: state.started_at(),
            ammo_label: state.ammo_label().to_string(),
            initial_ammo_count: state.initial_ammo_count(),
            current_ammo_count: state.current_ammo_count(),
            ammo_used: state.ammo_used(),
            total_xp_gained: state.total_xp_gained(),
            avg_xp_per_ammo: state.avg_xp_per_ammo(),
            skill_xp_gained,
        }
    }
}
