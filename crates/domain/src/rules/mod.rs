//! Ordem Paranormal derivation rules.
//!
//! Each submodule is a pure calculation over the Agent record:
//!
//! - `progression`: NEX to progression rank
//! - `class_resources`: per-class Health / Effort / Sanity maximums
//! - `defense`: base Defense and Dodge
//! - `items`: item buckets and armor bonuses
//! - `skill_formula`: skill labels and d20 roll formulas

mod class_resources;
mod defense;
mod items;
mod progression;
mod skill_formula;

pub use class_resources::{
    resource_maximums, ClassResourceTable, ResourceFormula, ResourceMaximums,
};
pub use defense::{base_defense, dodge, BASE_DEFENSE};
pub use items::{fold_defense_bonus, ItemBuckets, RitualTiers};
pub use progression::{progression_rank, ProgressionRank};
pub use skill_formula::{build_skill_roll, skill_label, SkillRoll, BURDEN_SUFFIX, TRAINED_SUFFIX};
