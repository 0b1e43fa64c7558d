//! Agent entity - a player character record
//!
//! This is the durable input snapshot. The sheet never writes back into it:
//! resource maximums and defense values present here are whatever the host
//! last stored, and are re-derived on every read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ids::AgentId;
use crate::value_objects::{AttributeScores, Skill, SkillKey};

/// Agent class.
///
/// Unrecognised class names deserialize to [`AgentClass::Unclassed`], which
/// carries the flat resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentClass {
    #[serde(alias = "Combatant", alias = "Combatente", alias = "combatente")]
    Combatant,
    #[serde(alias = "Specialist", alias = "Especialista", alias = "especialista")]
    Specialist,
    #[serde(alias = "Occultist", alias = "Ocultista", alias = "ocultista")]
    Occultist,
    #[default]
    #[serde(other)]
    Unclassed,
}

impl AgentClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combatant => "combatant",
            Self::Specialist => "specialist",
            Self::Occultist => "occultist",
            Self::Unclassed => "unclassed",
        }
    }
}

impl fmt::Display for AgentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current/maximum pair for a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePool {
    pub current: i32,
    pub max: i32,
}

/// Health (PV), Effort Points (PE), and Sanity (SAN).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    #[serde(alias = "PV")]
    pub health: ResourcePool,
    #[serde(alias = "PE")]
    pub effort: ResourcePool,
    #[serde(alias = "SAN")]
    pub sanity: ResourcePool,
}

/// Defense and Dodge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defense {
    pub value: i32,
    pub dodge: i32,
}

/// A player character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default)]
    pub id: AgentId,
    pub name: String,
    #[serde(default)]
    pub class: AgentClass,
    /// Raw NEX (exposure percentage); must not be negative
    #[serde(default, alias = "NEX")]
    pub nex: i32,
    #[serde(default)]
    pub attributes: AttributeScores,
    #[serde(default)]
    pub skills: BTreeMap<SkillKey, Skill>,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub defense: Defense,
}

impl Agent {
    pub fn new(name: impl Into<String>, class: AgentClass) -> Self {
        Self {
            id: AgentId::new(),
            name: name.into(),
            class,
            nex: 0,
            attributes: AttributeScores::default(),
            skills: BTreeMap::new(),
            resources: Resources::default(),
            defense: Defense::default(),
        }
    }

    pub fn skill(&self, key: SkillKey) -> Option<&Skill> {
        self.skills.get(&key)
    }
}
