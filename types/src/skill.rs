use std::fmt;

use serde::{Deserialize, Serialize};

/// The five combat skills whose experience is tracked.
///
/// The set is closed: the game client reports experience for many skills,
/// but only these accrue from combat actions and feed the per-ammo average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatSkill {
    Attack,
    Strength,
    Defence,
    Magic,
    Ranged,
}

impl CombatSkill {
    /// Canonical ordering, used for iteration and display.
    pub const ALL: [CombatSkill; 5] = [
        CombatSkill::Attack,
        CombatSkill::Strength,
        CombatSkill::Defence,
        CombatSkill::Magic,
        CombatSkill::Ranged,
    ];

    /// Human-readable skill name.
    pub fn label(self) -> &'static str {
        match self {
            CombatSkill::Attack => "Attack",
            CombatSkill::Strength => "Strength",
            CombatSkill::Defence => "Defence",
            CombatSkill::Magic => "Magic",
            CombatSkill::Ranged => "Ranged",
        }
    }
}

impl fmt::Display for CombatSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_skills_parse_as_snake_case_map_keys() {
        // Experience tables in config and script files key by skill name
        let parsed: HashMap<CombatSkill, i64> = toml::from_str("ranged = 100\nmagic = 50").unwrap();
        assert_eq!(parsed[&CombatSkill::Ranged], 100);
        assert_eq!(parsed[&CombatSkill::Magic], 50);
    }

    #[test]
    fn test_all_contains_each_skill_once() {
        let unique: std::collections::HashSet<_> = CombatSkill::ALL.iter().collect();
        assert_eq!(unique.len(), CombatSkill::ALL.len());
    }
}
