//! Durable records supplied by the host: Agents and their Items

mod agent;
mod item;

pub use agent::{Agent, AgentClass, Defense, ResourcePool, Resources};
pub use item::{Item, ItemKind, RitualCircle};
