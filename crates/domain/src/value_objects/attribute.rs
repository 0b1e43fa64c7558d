//! Attribute value objects - the five Agent attributes and their modifiers.
//!
//! Provides type safety for attribute references instead of string keys like
//! "agi" or "vig" taken from the sheet template.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Convert a raw attribute score to its modifier.
///
/// Uses the d20 halving rule: `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    // Rust's `/` rounds toward zero; div_euclid floors for a positive divisor
    score.saturating_sub(10).div_euclid(2)
}

/// Agent attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    /// Agilidade - reflexes, base of Defense
    #[serde(alias = "agi")]
    Agility,
    /// Vigor - endurance, scales Health
    #[serde(alias = "vig")]
    Vigor,
    /// Força - physical power
    #[serde(alias = "for")]
    Strength,
    /// Intelecto - reasoning and memory
    #[serde(alias = "int")]
    Intellect,
    /// Presença - willpower, scales Effort Points
    #[serde(alias = "pre")]
    Presence,
}

impl Attribute {
    /// Returns the short key used by the sheet template (e.g., "agi", "vig").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agility => "agi",
            Self::Vigor => "vig",
            Self::Strength => "for",
            Self::Intellect => "int",
            Self::Presence => "pre",
        }
    }

    /// Returns the English display name (e.g., "Agility").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Agility => "Agility",
            Self::Vigor => "Vigor",
            Self::Strength => "Strength",
            Self::Intellect => "Intellect",
            Self::Presence => "Presence",
        }
    }

    /// Returns all attributes in sheet order.
    pub fn all() -> [Attribute; 5] {
        [
            Self::Agility,
            Self::Vigor,
            Self::Strength,
            Self::Intellect,
            Self::Presence,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agi" | "agility" => Ok(Self::Agility),
            "vig" | "vigor" => Ok(Self::Vigor),
            "for" | "str" | "strength" => Ok(Self::Strength),
            "int" | "intellect" => Ok(Self::Intellect),
            "pre" | "presence" => Ok(Self::Presence),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// Raw attribute scores of an Agent.
///
/// Missing keys default to 0; unrecognised keys in the record are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeScores {
    #[serde(alias = "agi")]
    pub agility: i32,
    #[serde(alias = "vig")]
    pub vigor: i32,
    #[serde(alias = "for")]
    pub strength: i32,
    #[serde(alias = "int")]
    pub intellect: i32,
    #[serde(alias = "pre")]
    pub presence: i32,
}

impl AttributeScores {
    /// Raw score for an attribute.
    pub fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Agility => self.agility,
            Attribute::Vigor => self.vigor,
            Attribute::Strength => self.strength,
            Attribute::Intellect => self.intellect,
            Attribute::Presence => self.presence,
        }
    }

    /// Modifier for an attribute, see [`ability_modifier`].
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        ability_modifier(self.score(attribute))
    }
}
