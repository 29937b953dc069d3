//! Session script loading and the scripted game client.
//!
//! A script declares the host's starting state (item names, experience
//! totals) and a sequence of steps. Steps that change host state do so
//! before the corresponding callback fires, the same order a live client
//! presents: state first, notification second.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use quiver_core::client::{AmmoSlot, ClientError, GameClient, ItemId};
use quiver_types::CombatSkill;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub host: HostSetup,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Host state at the beginning of the script.
#[derive(Debug, Default, Deserialize)]
pub struct HostSetup {
    /// Item display names.
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    /// Experience totals per skill, keyed by skill name.
    #[serde(default)]
    pub experience: HashMap<CombatSkill, i64>,
    /// Item occupying the ammunition slot, if any.
    pub ammo: Option<AmmoEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ItemEntry {
    pub id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AmmoEntry {
    pub item: ItemId,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Start tracking.
    Start,
    /// Stop tracking and reset.
    Stop,
    /// One host tick. Optionally changes the ammunition slot first.
    Tick {
        #[serde(default)]
        ammo: Option<AmmoEntry>,
        #[serde(default)]
        clear_ammo: bool,
    },
    /// A skill-experience notification; updates the host, then fires.
    Xp { skill: CombatSkill, value: i64 },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a session script from a TOML file.
pub fn load(path: &Path) -> Result<SessionScript, ScriptError> {
    let contents = fs::read_to_string(path).map_err(|e| ScriptError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ScriptError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Game client backed by script-declared state.
pub struct ScriptedClient {
    experience: HashMap<CombatSkill, i64>,
    ammo: Option<AmmoSlot>,
    item_names: HashMap<ItemId, String>,
}

impl ScriptedClient {
    pub fn new(host: &HostSetup) -> Self {
        Self {
            experience: host.experience.clone(),
            ammo: host.ammo.map(|a| AmmoSlot { item_id: a.item, quantity: a.quantity }),
            item_names: host.items.iter().map(|i| (i.id, i.name.clone())).collect(),
        }
    }

    pub fn set_ammo(&mut self, entry: AmmoEntry) {
        self.ammo = Some(AmmoSlot { item_id: entry.item, quantity: entry.quantity });
    }

    pub fn clear_ammo(&mut self) {
        self.ammo = None;
    }

    pub fn set_experience(&mut self, skill: CombatSkill, value: i64) {
        self.experience.insert(skill, value);
    }
}

impl GameClient for ScriptedClient {
    fn skill_experience(&self, skill: CombatSkill) -> Result<i64, ClientError> {
        Ok(self.experience.get(&skill).copied().unwrap_or(0))
    }

    fn ammo_slot(&self) -> Result<Option<AmmoSlot>, ClientError> {
        Ok(self.ammo)
    }

    fn item_name(&self, item_id: ItemId) -> Result<String, ClientError> {
        self.item_names.get(&item_id).cloned().ok_or(ClientError::UnknownItem(item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_script() {
        let toml = r#"
[host]
ammo = { item = 806, quantity = 100 }

[[host.items]]
id = 806
name = "Adamant arrow"

[host.experience]
ranged = 10000
magic = 2500

[[steps]]
action = "start"

[[steps]]
action = "tick"
ammo = { item = 806, quantity = 95 }

[[steps]]
action = "xp"
skill = "ranged"
value = 10050

[[steps]]
action = "stop"
"#;

        let script: SessionScript = toml::from_str(toml).unwrap();
        assert_eq!(script.host.items.len(), 1);
        assert_eq!(script.host.experience[&CombatSkill::Ranged], 10_000);
        assert_eq!(script.steps.len(), 4);
        assert!(matches!(script.steps[0], Step::Start));
        assert!(matches!(
            script.steps[1],
            Step::Tick { ammo: Some(AmmoEntry { item: 806, quantity: 95 }), clear_ammo: false }
        ));
        assert!(matches!(
            script.steps[2],
            Step::Xp { skill: CombatSkill::Ranged, value: 10_050 }
        ));
    }

    #[test]
    fn test_scripted_client_answers_queries() {
        let script: SessionScript = toml::from_str(
            r#"
[host]
ammo = { item = 2, quantity = 7 }
items = [{ id = 2, name = "Bolt" }]
"#,
        )
        .unwrap();

        let client = ScriptedClient::new(&script.host);
        assert_eq!(client.ammo_slot().unwrap(), Some(AmmoSlot { item_id: 2, quantity: 7 }));
        assert_eq!(client.item_name(2).unwrap(), "Bolt");
        assert!(client.item_name(3).is_err());
        // Unknown skills read as zero experience
        assert_eq!(client.skill_experience(CombatSkill::Attack).unwrap(), 0);
    }
}
