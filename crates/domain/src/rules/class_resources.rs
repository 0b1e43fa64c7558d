//! Per-class resource table.
//!
//! Each class has a row of formulas for maximum Health (PV), Effort Points
//! (PE), and Sanity (SAN). A formula is a base value granted at the first
//! rank plus a per-step increment for every rank past the first. Health
//! scales with the Vigor modifier and Effort with the Presence modifier, both
//! in the base and in every step.

use serde::{Deserialize, Serialize};

use super::progression::ProgressionRank;
use crate::entities::AgentClass;
use crate::value_objects::{Attribute, AttributeScores};

/// One resource column of a class row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceFormula {
    /// Value at rank 0 and 1, before the attribute modifier
    pub base: i32,
    /// Increment per growth step, before the attribute modifier
    pub per_step: i32,
    /// Attribute whose modifier is added to the base and to every step
    pub scaling: Option<Attribute>,
}

impl ResourceFormula {
    const fn scaled(base: i32, per_step: i32, attribute: Attribute) -> Self {
        Self {
            base,
            per_step,
            scaling: Some(attribute),
        }
    }

    const fn fixed(base: i32, per_step: i32) -> Self {
        Self {
            base,
            per_step,
            scaling: None,
        }
    }

    /// `max = (base + mod) + growth_steps * (per_step + mod)`, saturating.
    ///
    /// Rank 0 and 1 have no growth steps and yield exactly the base.
    pub fn maximum(&self, rank: ProgressionRank, attributes: &AttributeScores) -> i32 {
        let modifier = self
            .scaling
            .map(|attribute| attributes.modifier(attribute))
            .unwrap_or(0);
        let growth = rank
            .growth_steps()
            .saturating_mul(self.per_step.saturating_add(modifier));
        self.base.saturating_add(modifier).saturating_add(growth)
    }
}

/// Resource formulas for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassResourceTable {
    pub health: ResourceFormula,
    pub effort: ResourceFormula,
    pub sanity: ResourceFormula,
}

const COMBATANT: ClassResourceTable = ClassResourceTable {
    health: ResourceFormula::scaled(20, 4, Attribute::Vigor),
    effort: ResourceFormula::scaled(2, 2, Attribute::Presence),
    sanity: ResourceFormula::fixed(12, 3),
};

const SPECIALIST: ClassResourceTable = ClassResourceTable {
    health: ResourceFormula::scaled(16, 3, Attribute::Vigor),
    effort: ResourceFormula::scaled(3, 3, Attribute::Presence),
    sanity: ResourceFormula::fixed(16, 4),
};

const OCCULTIST: ClassResourceTable = ClassResourceTable {
    health: ResourceFormula::scaled(12, 2, Attribute::Vigor),
    effort: ResourceFormula::scaled(4, 4, Attribute::Presence),
    sanity: ResourceFormula::fixed(20, 5),
};

/// Flat 10 in everything, regardless of rank or attributes.
const UNCLASSED: ClassResourceTable = ClassResourceTable {
    health: ResourceFormula::fixed(10, 0),
    effort: ResourceFormula::fixed(10, 0),
    sanity: ResourceFormula::fixed(10, 0),
};

impl ClassResourceTable {
    /// Formula row for a class.
    pub fn for_class(class: AgentClass) -> &'static ClassResourceTable {
        match class {
            AgentClass::Combatant => &COMBATANT,
            AgentClass::Specialist => &SPECIALIST,
            AgentClass::Occultist => &OCCULTIST,
            AgentClass::Unclassed => &UNCLASSED,
        }
    }

    pub fn maximums(&self, rank: ProgressionRank, attributes: &AttributeScores) -> ResourceMaximums {
        ResourceMaximums {
            health: self.health.maximum(rank, attributes),
            effort: self.effort.maximum(rank, attributes),
            sanity: self.sanity.maximum(rank, attributes),
        }
    }
}

/// Derived resource maximums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMaximums {
    pub health: i32,
    pub effort: i32,
    pub sanity: i32,
}

/// Maximum Health, Effort, and Sanity for a class at a rank.
pub fn resource_maximums(
    class: AgentClass,
    rank: ProgressionRank,
    attributes: &AttributeScores,
) -> ResourceMaximums {
    ClassResourceTable::for_class(class).maximums(rank, attributes)
}
