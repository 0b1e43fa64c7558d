//! Value objects for the Agent sheet domain

mod attribute;
mod roll_formula;
mod skill;

pub use attribute::{ability_modifier, Attribute, AttributeScores};
pub use roll_formula::{KeepMode, RollFormula, RollFormulaError, DEFAULT_POOL_SIZE};
pub use skill::{Skill, SkillConditions, SkillKey};
