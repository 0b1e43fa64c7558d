//! Loading Agent snapshots and label configuration from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use ordem_domain::{Agent, Item, SheetConfig};

/// One Agent record and the items it owns.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetInput {
    pub agent: Agent,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Read a snapshot file.
pub fn load_input(path: &Path) -> Result<SheetInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let input: SheetInput = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        agent_id = %input.agent.id,
        items = input.items.len(),
        "Loaded agent snapshot"
    );
    Ok(input)
}

/// Read a label configuration file, or use the English defaults.
pub fn load_labels(path: Option<&Path>) -> Result<SheetConfig> {
    let Some(path) = path else {
        return Ok(SheetConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read labels {}", path.display()))?;
    let config: SheetConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse labels {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        skills = config.skill_labels.len(),
        abilities = config.ability_labels.len(),
        "Loaded sheet labels"
    );
    Ok(config)
}
