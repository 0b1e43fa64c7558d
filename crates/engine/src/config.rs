//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON snapshot holding `{"agent": {...}, "items": [...]}`
    pub input_path: PathBuf,
    /// Optional JSON label configuration (`skillLabels`, `abilityLabels`)
    pub labels_path: Option<PathBuf>,
    /// Pretty-print the derived sheet
    pub pretty: bool,
    /// Also print the flattened roll context
    pub include_roll_context: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `input_override` (the first CLI argument) takes precedence over
    /// `SHEET_INPUT_PATH`.
    pub fn from_env(input_override: Option<String>) -> Result<Self> {
        Self::from_lookup(input_override, |key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(input_override: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let input_path = input_override
            .or_else(|| non_empty("SHEET_INPUT_PATH"))
            .context("SHEET_INPUT_PATH environment variable or an input path argument is required")?;

        Ok(Self {
            input_path: PathBuf::from(input_path),
            labels_path: non_empty("SHEET_LABELS_PATH").map(PathBuf::from),
            pretty: parse_flag(non_empty("SHEET_PRETTY"), true)
                .context("SHEET_PRETTY must be true or false")?,
            include_roll_context: parse_flag(non_empty("SHEET_ROLL_CONTEXT"), false)
                .context("SHEET_ROLL_CONTEXT must be true or false")?,
        })
    }
}

fn parse_flag(value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref().map(str::to_lowercase).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => anyhow::bail!("invalid boolean '{}'", other),
    }
}
