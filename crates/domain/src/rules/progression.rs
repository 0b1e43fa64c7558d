//! NEX progression.
//!
//! NEX is the raw exposure value; every 5% is one progression rank, and 99%
//! or more is the capped rank 20. The rank is never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// NEX at which the rank caps.
const NEX_CAP: i32 = 99;

/// NEX per rank.
const NEX_PER_RANK: i32 = 5;

/// Discrete progression rank, 0 through 20.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressionRank(u8);

impl ProgressionRank {
    pub const MAX: u8 = 20;

    /// Rank from an already-known value; `None` above [`Self::MAX`].
    pub fn new(rank: u8) -> Option<Self> {
        (rank <= Self::MAX).then_some(Self(rank))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Growth steps past the first rank: `rank - 1` for rank > 1, otherwise 0.
    pub fn growth_steps(&self) -> i32 {
        i32::from(self.0.saturating_sub(1))
    }

    /// Effort Points spendable per round.
    pub fn effort_per_round(&self) -> i32 {
        i32::from(self.0)
    }
}

impl fmt::Display for ProgressionRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert raw NEX into a progression rank.
///
/// # Errors
///
/// Returns [`DomainError::Validation`] for negative NEX.
pub fn progression_rank(nex: i32) -> Result<ProgressionRank, DomainError> {
    if nex < 0 {
        return Err(DomainError::validation(format!(
            "NEX cannot be negative, got {}",
            nex
        )));
    }

    let rank = if nex < NEX_CAP {
        // 0..=98 / 5 is at most 19
        (nex / NEX_PER_RANK) as u8
    } else {
        ProgressionRank::MAX
    };

    Ok(ProgressionRank(rank))
}
