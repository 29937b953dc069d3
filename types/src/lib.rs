pub mod formatting;
pub mod skill;

pub use skill::CombatSkill;
