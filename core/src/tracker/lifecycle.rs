//! Transitions for the tracking state machine.
//!
//! Each function advances the tracker in response to one stimulus (user
//! start/stop, host tick, experience change) and returns the signals to
//! emit. Host-query failures never escape a running session: the fields
//! keep their last observed values and a warning is logged.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use quiver_types::CombatSkill;

use crate::client::{ClientError, GameClient};
use crate::events::TrackerSignal;
use crate::session::{TrackerState, TrackerSummary};

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn stats_updated(state: &TrackerState, timestamp: NaiveDateTime) -> TrackerSignal {
    TrackerSignal::StatsUpdated { summary: TrackerSummary::from_state(state), timestamp }
}

/// Begin a tracking session.
///
/// No-op when already tracking. Seeds both experience maps with the host's
/// current totals (so initial gain is zero) and the ammo counters from the
/// ammunition slot. A client error abandons the attempt and leaves the
/// stopped state untouched; the error is the caller's to log.
pub fn begin_tracking<C: GameClient>(
    state: &mut TrackerState,
    client: &C,
    skills: &[CombatSkill],
) -> Result<Vec<TrackerSignal>, ClientError> {
    if state.tracking {
        return Ok(Vec::new());
    }

    // Complete every host query before touching state, so an unavailable
    // client cannot leave a half-seeded session behind.
    let mut seed_xp = HashMap::with_capacity(skills.len());
    for &skill in skills {
        seed_xp.insert(skill, client.skill_experience(skill)?);
    }
    let slot = client.ammo_slot()?;
    let label = match slot {
        Some(slot) => Some(client.item_name(slot.item_id)?),
        None => None,
    };

    state.reset();
    state.initial_skill_xp = seed_xp.clone();
    state.current_skill_xp = seed_xp;
    if let Some(slot) = slot {
        state.initial_ammo_count = slot.quantity;
        state.current_ammo_count = slot.quantity;
    }
    if let Some(label) = label {
        state.ammo_label = label;
    }
    state.recompute_stats();

    let timestamp = now();
    state.tracking = true;
    state.started_at = Some(timestamp);

    tracing::info!(
        ammo = %state.ammo_label,
        count = state.current_ammo_count,
        skills = skills.len(),
        "tracking started"
    );

    Ok(vec![TrackerSignal::TrackingStarted { timestamp }, stats_updated(state, timestamp)])
}

/// End the tracking session and reset every field to its default.
///
/// Idempotent: stopping an already-stopped tracker emits nothing.
pub fn end_tracking(state: &mut TrackerState) -> Vec<TrackerSignal> {
    let was_tracking = state.tracking;
    state.reset();

    if !was_tracking {
        return Vec::new();
    }

    let timestamp = now();
    tracing::info!("tracking stopped");
    vec![TrackerSignal::TrackingStopped { timestamp }, stats_updated(state, timestamp)]
}

/// Advance the tracker by one host tick: re-poll the ammunition slot and
/// refresh the derived statistics.
///
/// An empty slot (or a failed query) leaves the ammo fields at their last
/// observed values.
pub fn advance_tick<C: GameClient>(state: &mut TrackerState, client: &C) -> Vec<TrackerSignal> {
    if !state.tracking {
        return Vec::new();
    }

    let timestamp = now();
    let mut signals = Vec::new();

    match client.ammo_slot() {
        Ok(Some(slot)) => {
            match client.item_name(slot.item_id) {
                Ok(name) => state.ammo_label = name,
                Err(e) => {
                    tracing::warn!(error = %e, item_id = slot.item_id, "item name lookup failed")
                }
            }
            state.current_ammo_count = slot.quantity;

            // initial_ammo_count still holds the previous poll's quantity, so
            // the difference is consumption since that poll. Re-seeded below;
            // the counter never spans more than one polling interval.
            let used = state.initial_ammo_count - state.current_ammo_count;
            if used < 0 {
                // More ammo than last poll: resupply, restart the interval.
                state.ammo_used = 0;
                signals.push(TrackerSignal::ResupplyDetected {
                    new_count: slot.quantity,
                    timestamp,
                });
            } else {
                state.ammo_used = used;
            }
            state.initial_ammo_count = state.current_ammo_count;
        }
        Ok(None) => {
            // Empty slot: keep the last observed ammo state.
        }
        Err(e) => {
            tracing::warn!(error = %e, "ammo slot poll failed, keeping last observed state");
        }
    }

    state.recompute_stats();
    signals.push(stats_updated(state, timestamp));
    signals
}

/// Record a skill-experience-changed notification from the host.
///
/// Ignored while stopped and for skills outside the set seeded at start.
pub fn record_stat_change(
    state: &mut TrackerState,
    skill: CombatSkill,
    experience: i64,
) -> Vec<TrackerSignal> {
    if !state.tracking || !state.initial_skill_xp.contains_key(&skill) {
        return Vec::new();
    }

    state.current_skill_xp.insert(skill, experience);
    state.recompute_stats();

    vec![stats_updated(state, now())]
}
