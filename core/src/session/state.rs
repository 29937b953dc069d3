use std::collections::HashMap;

use chrono::NaiveDateTime;
use quiver_types::CombatSkill;

/// Label shown while no ammunition item has been observed.
pub const NO_AMMO_LABEL: &str = "None";

/// Pure storage for tracking state.
/// Transition logic lives in the tracker module; routing in EventProcessor.
#[derive(Debug, Clone)]
pub struct TrackerState {
    pub(crate) tracking: bool,
    pub(crate) started_at: Option<NaiveDateTime>,

    // Ammunition slot observations
    pub(crate) initial_ammo_count: i64,
    pub(crate) current_ammo_count: i64,
    pub(crate) ammo_used: i64,
    pub(crate) ammo_label: String,

    // Experience totals, keyed by tracked skill
    pub(crate) initial_skill_xp: HashMap<CombatSkill, i64>,
    pub(crate) current_skill_xp: HashMap<CombatSkill, i64>,

    // Derived statistics
    pub(crate) total_xp_gained: i64,
    pub(crate) avg_xp_per_ammo: f64,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            tracking: false,
            started_at: None,
            initial_ammo_count: 0,
            current_ammo_count: 0,
            ammo_used: 0,
            ammo_label: NO_AMMO_LABEL.to_string(),
            initial_skill_xp: HashMap::new(),
            current_skill_xp: HashMap::new(),
            total_xp_gained: 0,
            avg_xp_per_ammo: 0.0,
        }
    }
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every field to its reset default.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recompute the derived statistics from the experience maps and the
    /// current ammo counter. Always a from-scratch recomputation; the total
    /// never accumulates across calls.
    pub(crate) fn recompute_stats(&mut self) {
        self.total_xp_gained = self
            .initial_skill_xp
            .iter()
            .map(|(skill, initial)| {
                self.current_skill_xp.get(skill).copied().unwrap_or(*initial) - initial
            })
            .sum();

        self.avg_xp_per_ammo = if self.ammo_used > 0 {
            self.total_xp_gained as f64 / self.ammo_used as f64
        } else {
            0.0
        };
    }

    // --- Accessors ---

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }

    pub fn initial_ammo_count(&self) -> i64 {
        self.initial_ammo_count
    }

    pub fn current_ammo_count(&self) -> i64 {
        self.current_ammo_count
    }

    pub fn ammo_used(&self) -> i64 {
        self.ammo_used
    }

    pub fn ammo_label(&self) -> &str {
        &self.ammo_label
    }

    pub fn total_xp_gained(&self) -> i64 {
        self.total_xp_gained
    }

    pub fn avg_xp_per_ammo(&self) -> f64 {
        self.avg_xp_per_ammo
    }

    /// Skills seeded at the start of the current session.
    pub fn tracked_skills(&self) -> impl Iterator<Item = CombatSkill> + '_ {
        CombatSkill::ALL
            .into_iter()
            .filter(|skill| self.initial_skill_xp.contains_key(skill))
    }

    /// Experience gained for one skill since tracking started.
    pub fn xp_gained(&self, skill: CombatSkill) -> i64 {
        let Some(initial) = self.initial_skill_xp.get(&skill) else {
            return 0;
        };
        self.current_skill_xp.get(&skill).copied().unwrap_or(*initial) - initial
    }
}
