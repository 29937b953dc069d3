//! Game client boundary.
//!
//! The host game client owns the character's equipment and skill state; the
//! tracker only ever queries it. Implementations live in whatever binds the
//! tracker to a real client (or to a scripted one in tests and the replay
//! harness).

use quiver_types::CombatSkill;
use thiserror::Error;

/// Item identifier assigned by the game client.
pub type ItemId = i64;

/// The item occupying the ammunition equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoSlot {
    pub item_id: ItemId,
    pub quantity: i64,
}

/// Errors surfaced by game client queries.
///
/// An empty ammunition slot is NOT an error; it is reported as `Ok(None)`
/// from [`GameClient::ammo_slot`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("game client unavailable: {0}")]
    Unavailable(String),

    #[error("unknown item id {0}")]
    UnknownItem(ItemId),
}

/// Read-only queries against the host game client.
pub trait GameClient {
    /// Current total experience for a skill.
    fn skill_experience(&self, skill: CombatSkill) -> Result<i64, ClientError>;

    /// The item occupying the ammunition equipment slot, if any.
    fn ammo_slot(&self) -> Result<Option<AmmoSlot>, ClientError>;

    /// Display name for an item.
    fn item_name(&self, item_id: ItemId) -> Result<String, ClientError>;
}
