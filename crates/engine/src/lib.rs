//! Ordem Engine library.
//!
//! Thin runner around `ordem-domain`: reads configuration from the
//! environment, loads an Agent snapshot from disk, and renders its derived
//! sheet as JSON.
//!
//! ## Structure
//!
//! - `config` - Environment configuration
//! - `snapshot` - Snapshot and label file loading

pub mod config;
pub mod snapshot;

use anyhow::{Context, Result};
use serde::Serialize;

use ordem_domain::{AgentSheet, DerivedView, RollContext};

pub use config::AppConfig;
pub use snapshot::{load_input, load_labels, SheetInput};

/// Output document written by the runner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetOutput {
    pub sheet: DerivedView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_context: Option<RollContext>,
}

/// Load, derive, and render one sheet.
pub fn run(config: &AppConfig) -> Result<String> {
    let labels = load_labels(config.labels_path.as_deref())?;
    let input = load_input(&config.input_path)?;

    let sheet = AgentSheet::new(labels)
        .prepare(&input.agent, &input.items)
        .with_context(|| format!("Failed to prepare sheet for agent {}", input.agent.id))?;

    let roll_context = config.include_roll_context.then(|| sheet.roll_context());
    let output = SheetOutput {
        sheet,
        roll_context,
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize sheet")?;

    Ok(rendered)
}
