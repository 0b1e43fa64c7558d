//! Roll formula value object and parsing
//!
//! A skill roll is a pool of d20s where either the highest or the lowest die
//! is kept, followed by flat bonus terms: "2d20kl+3+1", "1d20kh".
//! The rendered string is handed to an external dice evaluator, so the
//! grammar must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dice rolled when a skill has no governing-attribute advantage.
pub const DEFAULT_POOL_SIZE: u8 = 2;

/// Error when parsing a roll formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollFormulaError {
    /// The formula string is empty
    #[error("Empty roll formula")]
    Empty,
    /// Invalid format - expected NdK followed by kh/kl and +terms
    #[error("Invalid roll formula: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Only d20 pools are produced by the sheet
    #[error("Unsupported die size: d{0}")]
    UnsupportedDie(u32),
}

/// Which die of the pool counts as the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeepMode {
    /// `kh` - keep the highest die
    Highest,
    /// `kl` - keep the lowest die
    Lowest,
}

impl KeepMode {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Highest => "kh",
            Self::Lowest => "kl",
        }
    }
}

/// A d20 pool roll like "2d20kl+3+1".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollFormula {
    /// Number of d20s in the pool
    pub dice_count: u8,
    /// Keep the highest or the lowest die
    pub keep: KeepMode,
    /// Flat terms added after the pool, in order
    pub terms: Vec<i32>,
}

impl RollFormula {
    /// Build the roll for a skill.
    ///
    /// An advantage of 0 means "roll two, keep the worse"; any other value
    /// rolls that many dice and keeps the best. Zero-valued terms are omitted.
    pub fn for_skill(advantage: u8, value: i32, modifier: i32) -> Self {
        let (dice_count, keep) = if advantage != 0 {
            (advantage, KeepMode::Highest)
        } else {
            (DEFAULT_POOL_SIZE, KeepMode::Lowest)
        };

        let terms = [value, modifier]
            .into_iter()
            .filter(|term| *term != 0)
            .collect();

        Self {
            dice_count,
            keep,
            terms,
        }
    }

    /// Sum of the flat terms.
    pub fn flat_bonus(&self) -> i32 {
        self.terms
            .iter()
            .fold(0i32, |total, term| total.saturating_add(*term))
    }
}

impl fmt::Display for RollFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d20{}", self.dice_count, self.keep.token())?;
        // Every term is written as "+<n>"; negative terms come out as "+-n",
        // which the dice evaluator accepts.
        for term in &self.terms {
            write!(f, "+{}", term)?;
        }
        Ok(())
    }
}

impl FromStr for RollFormula {
    type Err = RollFormulaError;

    /// Parse a roll formula string like "2d20kl+3+1" or "1d20kh+-2".
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(RollFormulaError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            RollFormulaError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u8 = dice_count_str.parse().map_err(|_| {
            RollFormulaError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
        })?;
        if dice_count == 0 {
            return Err(RollFormulaError::InvalidDiceCount);
        }

        let after_d = &input[d_pos + 1..];
        let keep_pos = after_d.find('k').ok_or_else(|| {
            RollFormulaError::InvalidFormat(format!("Missing keep token in '{}'", input))
        })?;

        let die_str = &after_d[..keep_pos];
        let die_size: u32 = die_str.parse().map_err(|_| {
            RollFormulaError::InvalidFormat(format!("Invalid die size: '{}'", die_str))
        })?;
        if die_size != 20 {
            return Err(RollFormulaError::UnsupportedDie(die_size));
        }

        let rest = &after_d[keep_pos..];
        let (keep, rest) = if let Some(rest) = rest.strip_prefix("kh") {
            (KeepMode::Highest, rest)
        } else if let Some(rest) = rest.strip_prefix("kl") {
            (KeepMode::Lowest, rest)
        } else {
            return Err(RollFormulaError::InvalidFormat(format!(
                "Invalid keep token in '{}'",
                input
            )));
        };

        let terms = if rest.is_empty() {
            Vec::new()
        } else {
            let rest = rest.strip_prefix('+').ok_or_else(|| {
                RollFormulaError::InvalidFormat(format!("Terms must start with '+': '{}'", rest))
            })?;
            rest.split('+')
                .map(|term| {
                    term.parse::<i32>().map_err(|_| {
                        RollFormulaError::InvalidFormat(format!("Invalid term: '+{}'", term))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            dice_count,
            keep,
            terms,
        })
    }
}
