//! Sheet configuration - injected display labels.
//!
//! Labels are looked up here instead of through a global localization
//! registry. A key without a configured label is shown as its raw key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::{Attribute, SkillKey};

/// Display labels for skills and attributes.
///
/// Deserializes from `{"skillLabels": {...}, "abilityLabels": {...}}`. A
/// missing table falls back to the English defaults; a table that is present
/// replaces the defaults entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetConfig {
    pub skill_labels: BTreeMap<SkillKey, String>,
    pub ability_labels: BTreeMap<Attribute, String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            skill_labels: SkillKey::all()
                .into_iter()
                .map(|key| (key, key.display_name().to_string()))
                .collect(),
            ability_labels: Attribute::all()
                .into_iter()
                .map(|attribute| (attribute, attribute.display_name().to_string()))
                .collect(),
        }
    }
}

impl SheetConfig {
    /// Config with no labels; every key renders as itself.
    pub fn unlabeled() -> Self {
        Self {
            skill_labels: BTreeMap::new(),
            ability_labels: BTreeMap::new(),
        }
    }

    pub fn skill_label(&self, key: SkillKey) -> &str {
        self.skill_labels
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.as_str())
    }

    pub fn ability_label(&self, attribute: Attribute) -> &str {
        self.ability_labels
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or_else(|| attribute.as_str())
    }
}
