//! Skill labels and roll formulas.

use crate::value_objects::{RollFormula, Skill, SkillConditions};

/// Label suffix for a skill under load.
pub const BURDEN_SUFFIX: char = '+';

/// Label suffix for a trained skill.
pub const TRAINED_SUFFIX: char = '*';

/// Display label: the skill name with `+` when burdened, else `*` when trained.
pub fn skill_label(name: &str, conditions: SkillConditions) -> String {
    let suffix = if conditions.burden {
        Some(BURDEN_SUFFIX)
    } else if conditions.trained {
        Some(TRAINED_SUFFIX)
    } else {
        None
    };

    let mut label = String::with_capacity(name.len() + 1);
    label.push_str(name);
    label.extend(suffix);
    label
}

/// Label and roll formula built for one skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRoll {
    pub label: String,
    pub formula: RollFormula,
}

/// Build the label and roll formula for a skill.
///
/// The skill value and its modifier are appended after the pool when nonzero.
pub fn build_skill_roll(name: &str, skill: &Skill) -> SkillRoll {
    SkillRoll {
        label: skill_label(name, skill.conditions),
        formula: RollFormula::for_skill(
            skill.governing_attribute_advantage,
            skill.value,
            skill.modifier,
        ),
    }
}
