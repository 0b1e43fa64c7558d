//! Derived view model types.
//!
//! Everything here is rebuilt on every read and owns no persisted state.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::entities::{AgentClass, Defense, Resources};
use crate::ids::AgentId;
use crate::rules::{ItemBuckets, ProgressionRank};
use crate::value_objects::{Attribute, SkillKey};

/// One attribute as shown on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeView {
    pub score: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
    pub label: String,
}

/// One skill as shown on the sheet, with its roll formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub value: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
    pub trained: bool,
    pub burden: bool,
    pub governing_attribute_advantage: u8,
    pub label: String,
    pub formula: String,
}

/// Fully derived Agent sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub agent_id: AgentId,
    pub name: String,
    pub class: AgentClass,
    pub nex: i32,
    pub rank: ProgressionRank,
    pub attributes: BTreeMap<Attribute, AttributeView>,
    /// Current values from the record, maximums derived
    pub resources: Resources,
    pub effort_per_round: i32,
    pub defense: Defense,
    pub skills: BTreeMap<SkillKey, SkillView>,
    pub items: ItemBuckets,
}

impl DerivedView {
    /// Data exposed to formula references elsewhere.
    pub fn roll_context(&self) -> RollContext {
        RollContext {
            skills: self.skills.clone(),
            level: self.rank.value(),
        }
    }
}

/// Skill views flattened to the top level plus the progression level.
///
/// Serializes as `{"reflexes": {...}, "will": {...}, "level": 7}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollContext {
    #[serde(flatten)]
    pub skills: BTreeMap<SkillKey, SkillView>,
    pub level: u8,
}

impl RollContext {
    /// Resolve a reference like `@reflexes.mod`, `fighting.value`, or `@level`.
    ///
    /// Returns `None` for unknown skills, skills the Agent does not have, and
    /// unknown fields.
    pub fn resolve(&self, reference: &str) -> Option<i32> {
        let reference = reference.trim().trim_start_matches('@');
        if reference == "level" || reference == "lvl" {
            return Some(i32::from(self.level));
        }

        let (skill, field) = reference.split_once('.')?;
        let key: SkillKey = skill.parse().ok()?;
        let view = self.skills.get(&key)?;
        match field {
            "value" => Some(view.value),
            "mod" => Some(view.modifier),
            "governingAttributeAdvantage" => Some(i32::from(view.governing_attribute_advantage)),
            _ => None,
        }
    }
}
