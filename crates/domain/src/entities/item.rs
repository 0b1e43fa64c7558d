//! Item entity - equipment, features, and rituals owned by an Agent
//!
//! Items arrive as flat records with a `type` discriminator. Type-specific
//! payloads (armor defense, ritual circle) are kept as raw JSON values:
//! the sheet tolerates malformed payloads and skips them during aggregation
//! rather than rejecting the whole record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::ItemId;

/// Ritual tier (círculo), 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RitualCircle(u8);

impl RitualCircle {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(circle: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&circle)
            .then_some(Self(circle))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// All circles in ascending order.
    pub fn all() -> [RitualCircle; 4] {
        [Self(1), Self(2), Self(3), Self(4)]
    }
}

/// A JSON number with no fractional part; `3` and `3.0` both qualify.
fn whole_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite() && v.fract() == 0.0)
}

/// Type discriminator and type-specific payload of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemKind {
    #[serde(alias = "item")]
    Gear,
    Feature,
    #[serde(alias = "protection")]
    Armor {
        /// Defense bonus; only whole-number payloads count
        #[serde(default)]
        defense: Option<Value>,
    },
    #[serde(alias = "generalEquipament")]
    GeneralEquipment,
    Armament,
    Ritual {
        /// Circle tier; anything other than a whole number 1-4 is ignored
        #[serde(default)]
        circle: Option<Value>,
    },
    /// Any other type; dropped from the sheet
    #[serde(other)]
    Unknown,
}

/// An item record as supplied by the host.
///
/// # Simple Data Struct
///
/// No invariants to protect: malformed payloads are representable and are
/// handled by the aggregation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: None,
            kind,
        }
    }

    /// Armor defense bonus, when the payload is a whole number in `i32` range.
    pub fn defense_bonus(&self) -> Option<i32> {
        match &self.kind {
            ItemKind::Armor {
                defense: Some(value),
            } => whole_number(value)
                .filter(|v| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v))
                .map(|v| v as i32),
            _ => None,
        }
    }

    /// Ritual circle, when the payload is a whole number between 1 and 4.
    pub fn ritual_circle(&self) -> Option<RitualCircle> {
        match &self.kind {
            ItemKind::Ritual {
                circle: Some(value),
            } => whole_number(value)
                .filter(|v| {
                    (f64::from(RitualCircle::MIN)..=f64::from(RitualCircle::MAX)).contains(v)
                })
                .and_then(|v| RitualCircle::new(v as u8)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Item {
        serde_json::from_value(value).expect("parse item")
    }

    #[test]
    fn test_item_type_tags() {
        assert_eq!(parse(json!({"name": "Rope", "type": "gear"})).kind, ItemKind::Gear);
        assert_eq!(parse(json!({"name": "Rope", "type": "item"})).kind, ItemKind::Gear);
        assert_eq!(
            parse(json!({"name": "Kit", "type": "generalEquipament"})).kind,
            ItemKind::GeneralEquipment
        );
        assert_eq!(
            parse(json!({"name": "Vest", "type": "protection", "defense": 2})).defense_bonus(),
            Some(2)
        );
    }

    #[test]
    fn test_unknown_type_is_not_an_error() {
        let item = parse(json!({"name": "Mystery", "type": "vehicle", "speed": 80}));
        assert_eq!(item.kind, ItemKind::Unknown);
    }

    #[test]
    fn test_defense_bonus_requires_a_number() {
        let heavy = parse(json!({"name": "Plate", "type": "armor", "defense": "heavy"}));
        assert_eq!(heavy.defense_bonus(), None);
        let missing = parse(json!({"name": "Plate", "type": "armor"}));
        assert_eq!(missing.defense_bonus(), None);
        let numeric = parse(json!({"name": "Plate", "type": "armor", "defense": 5}));
        assert_eq!(numeric.defense_bonus(), Some(5));
    }

    #[test]
    fn test_ritual_circle_bounds() {
        let circle = |value: Value| {
            parse(json!({"name": "Rite", "type": "ritual", "circle": value})).ritual_circle()
        };
        assert_eq!(circle(json!(1)), RitualCircle::new(1));
        assert_eq!(circle(json!(4)), RitualCircle::new(4));
        assert_eq!(circle(json!(0)), None);
        assert_eq!(circle(json!(5)), None);
        assert_eq!(circle(json!("2")), None);
        assert_eq!(
            parse(json!({"name": "Rite", "type": "ritual"})).ritual_circle(),
            None
        );
    }

    #[test]
    fn test_whole_number_floats_are_accepted() {
        let vest = parse(json!({"name": "Vest", "type": "armor", "defense": 3.0}));
        assert_eq!(vest.defense_bonus(), Some(3));
        let rite = parse(json!({"name": "Rite", "type": "ritual", "circle": 2.0}));
        assert_eq!(rite.ritual_circle(), RitualCircle::new(2));
    }

    #[test]
    fn test_fractional_and_out_of_range_numbers_are_rejected() {
        let vest = parse(json!({"name": "Vest", "type": "armor", "defense": 2.5}));
        assert_eq!(vest.defense_bonus(), None);
        let huge = parse(json!({"name": "Vest", "type": "armor", "defense": 3_000_000_000i64}));
        assert_eq!(huge.defense_bonus(), None);
        let rite = parse(json!({"name": "Rite", "type": "ritual", "circle": 2.5}));
        assert_eq!(rite.ritual_circle(), None);
        let deep = parse(json!({"name": "Rite", "type": "ritual", "circle": 4.0e3}));
        assert_eq!(deep.ritual_circle(), None);
    }
}
