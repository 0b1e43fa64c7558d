//! Ordem Domain - Agent records and the rules that derive their sheet.
//!
//! Data flows one way: an immutable [`Agent`] plus its [`Item`]s go into
//! [`AgentSheet::prepare`], which returns a fresh [`DerivedView`].

pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod sheet;
pub mod value_objects;

pub use entities::{Agent, AgentClass, Defense, Item, ItemKind, ResourcePool, Resources, RitualCircle};

pub use error::DomainError;

pub use ids::{AgentId, ItemId};

pub use rules::{
    base_defense, build_skill_roll, dodge, fold_defense_bonus, progression_rank,
    resource_maximums, skill_label, ClassResourceTable, ItemBuckets, ProgressionRank,
    ResourceFormula, ResourceMaximums, RitualTiers, SkillRoll,
};

pub use sheet::{AgentSheet, AttributeView, DerivedView, RollContext, SheetConfig, SkillView};

pub use value_objects::{
    ability_modifier, Attribute, AttributeScores, KeepMode, RollFormula, RollFormulaError, Skill,
    SkillConditions, SkillKey,
};
