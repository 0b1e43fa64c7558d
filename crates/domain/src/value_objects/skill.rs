//! Skill value objects - the fixed Agent skill list and per-skill inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Agent skills (perícias).
///
/// Serialized in camelCase; the Portuguese keys used by the sheet template are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillKey {
    #[serde(alias = "acrobacia")]
    Acrobatics,
    #[serde(alias = "adestramento")]
    AnimalHandling,
    #[serde(alias = "artes")]
    Arts,
    #[serde(alias = "atletismo")]
    Athletics,
    #[serde(alias = "atualidades")]
    CurrentEvents,
    #[serde(alias = "ciencia")]
    Science,
    Crime,
    #[serde(alias = "diplomacia")]
    Diplomacy,
    #[serde(alias = "enganacao")]
    Deception,
    Fortitude,
    #[serde(alias = "furtividade")]
    Stealth,
    #[serde(alias = "iniciativa")]
    Initiative,
    #[serde(alias = "intimidacao")]
    Intimidation,
    #[serde(alias = "intuicao")]
    Insight,
    #[serde(alias = "investigacao")]
    Investigation,
    #[serde(alias = "luta")]
    Fighting,
    #[serde(alias = "medicina")]
    Medicine,
    #[serde(alias = "ocultismo")]
    Occultism,
    #[serde(alias = "percepcao")]
    Perception,
    #[serde(alias = "pilotagem")]
    Piloting,
    #[serde(alias = "pontaria")]
    Aim,
    #[serde(alias = "profissao")]
    Profession,
    #[serde(alias = "reflexos")]
    Reflexes,
    #[serde(alias = "religiao")]
    Religion,
    #[serde(alias = "sobrevivencia")]
    Survival,
    #[serde(alias = "tatica")]
    Tactics,
    #[serde(alias = "tecnologia")]
    Technology,
    #[serde(alias = "vontade")]
    Will,
}

impl SkillKey {
    /// Returns the camelCase key (e.g., "reflexes", "animalHandling").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acrobatics => "acrobatics",
            Self::AnimalHandling => "animalHandling",
            Self::Arts => "arts",
            Self::Athletics => "athletics",
            Self::CurrentEvents => "currentEvents",
            Self::Science => "science",
            Self::Crime => "crime",
            Self::Diplomacy => "diplomacy",
            Self::Deception => "deception",
            Self::Fortitude => "fortitude",
            Self::Stealth => "stealth",
            Self::Initiative => "initiative",
            Self::Intimidation => "intimidation",
            Self::Insight => "insight",
            Self::Investigation => "investigation",
            Self::Fighting => "fighting",
            Self::Medicine => "medicine",
            Self::Occultism => "occultism",
            Self::Perception => "perception",
            Self::Piloting => "piloting",
            Self::Aim => "aim",
            Self::Profession => "profession",
            Self::Reflexes => "reflexes",
            Self::Religion => "religion",
            Self::Survival => "survival",
            Self::Tactics => "tactics",
            Self::Technology => "technology",
            Self::Will => "will",
        }
    }

    /// Returns the English display name (e.g., "Animal Handling").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arts => "Arts",
            Self::Athletics => "Athletics",
            Self::CurrentEvents => "Current Events",
            Self::Science => "Science",
            Self::Crime => "Crime",
            Self::Diplomacy => "Diplomacy",
            Self::Deception => "Deception",
            Self::Fortitude => "Fortitude",
            Self::Stealth => "Stealth",
            Self::Initiative => "Initiative",
            Self::Intimidation => "Intimidation",
            Self::Insight => "Insight",
            Self::Investigation => "Investigation",
            Self::Fighting => "Fighting",
            Self::Medicine => "Medicine",
            Self::Occultism => "Occultism",
            Self::Perception => "Perception",
            Self::Piloting => "Piloting",
            Self::Aim => "Aim",
            Self::Profession => "Profession",
            Self::Reflexes => "Reflexes",
            Self::Religion => "Religion",
            Self::Survival => "Survival",
            Self::Tactics => "Tactics",
            Self::Technology => "Technology",
            Self::Will => "Will",
        }
    }

    /// Returns every skill in sheet order.
    pub fn all() -> [SkillKey; 28] {
        [
            Self::Acrobatics,
            Self::AnimalHandling,
            Self::Arts,
            Self::Athletics,
            Self::CurrentEvents,
            Self::Science,
            Self::Crime,
            Self::Diplomacy,
            Self::Deception,
            Self::Fortitude,
            Self::Stealth,
            Self::Initiative,
            Self::Intimidation,
            Self::Insight,
            Self::Investigation,
            Self::Fighting,
            Self::Medicine,
            Self::Occultism,
            Self::Perception,
            Self::Piloting,
            Self::Aim,
            Self::Profession,
            Self::Reflexes,
            Self::Religion,
            Self::Survival,
            Self::Tactics,
            Self::Technology,
            Self::Will,
        ]
    }
}

impl fmt::Display for SkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}

/// Training and load conditions of a skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConditions {
    pub trained: bool,
    /// Penalised by carried load
    #[serde(alias = "carga")]
    pub burden: bool,
}

/// Authored per-skill input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub value: i32,
    /// Flat modifier appended after the value when nonzero
    #[serde(alias = "mod")]
    pub modifier: i32,
    pub conditions: SkillConditions,
    /// 0 rolls two dice and keeps the lowest; N rolls N dice and keeps the highest.
    pub governing_attribute_advantage: u8,
}
