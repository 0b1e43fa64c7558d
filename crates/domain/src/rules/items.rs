//! Item aggregation.
//!
//! Sorts an Agent's flat item list into typed buckets and folds numeric armor
//! bonuses into Defense. Anomalies are skipped without failing the sheet:
//! unknown item types, rituals without a valid circle, and armor whose
//! defense payload is not an integer.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::entities::{Item, ItemKind, RitualCircle};

/// Rituals grouped by circle. All four circles are always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RitualTiers {
    tiers: [Vec<Item>; 4],
}

impl RitualTiers {
    pub fn get(&self, circle: RitualCircle) -> &[Item] {
        &self.tiers[usize::from(circle.value() - RitualCircle::MIN)]
    }

    fn push(&mut self, circle: RitualCircle, item: Item) {
        self.tiers[usize::from(circle.value() - RitualCircle::MIN)].push(item);
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for RitualTiers {
    /// Serialized as `{"1": [...], "2": [...], "3": [...], "4": [...]}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tiers.len()))?;
        for circle in RitualCircle::all() {
            map.serialize_entry(&circle.value().to_string(), self.get(circle))?;
        }
        map.end()
    }
}

/// Items sorted by type, in their original order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBuckets {
    pub gear: Vec<Item>,
    pub features: Vec<Item>,
    pub armor: Vec<Item>,
    pub general_equipment: Vec<Item>,
    pub armament: Vec<Item>,
    pub rituals: RitualTiers,
}

impl ItemBuckets {
    /// Classify items by type.
    pub fn classify(items: &[Item]) -> Self {
        let mut buckets = Self::default();

        for item in items {
            match &item.kind {
                ItemKind::Gear => buckets.gear.push(item.clone()),
                ItemKind::Feature => buckets.features.push(item.clone()),
                ItemKind::Armor { .. } => buckets.armor.push(item.clone()),
                ItemKind::GeneralEquipment => buckets.general_equipment.push(item.clone()),
                ItemKind::Armament => buckets.armament.push(item.clone()),
                ItemKind::Ritual { circle } => match item.ritual_circle() {
                    Some(tier) => buckets.rituals.push(tier, item.clone()),
                    None => {
                        tracing::trace!(item_id = %item.id, ?circle, "Skipping ritual without a valid circle");
                    }
                },
                ItemKind::Unknown => {
                    tracing::trace!(item_id = %item.id, name = %item.name, "Skipping item of unknown type");
                }
            }
        }

        buckets
    }
}

/// Add every integer armor defense bonus to `current`.
pub fn fold_defense_bonus(armor: &[Item], current: i32) -> i32 {
    armor.iter().fold(current, |total, item| match item.defense_bonus() {
        Some(bonus) => total.saturating_add(bonus),
        None => {
            tracing::trace!(item_id = %item.id, "Armor defense is not numeric, contributes 0");
            total
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn ritual(name: &str, circle: Value) -> Item {
        Item::new(
            name,
            ItemKind::Ritual {
                circle: Some(circle),
            },
        )
    }

    fn armor(name: &str, defense: Value) -> Item {
        Item::new(
            name,
            ItemKind::Armor {
                defense: Some(defense),
            },
        )
    }

    fn circle(value: u8) -> RitualCircle {
        RitualCircle::new(value).expect("valid circle")
    }

    #[test]
    fn test_classify_by_type() {
        let items = vec![
            Item::new("Flashlight", ItemKind::Gear),
            Item::new("Sixth Sense", ItemKind::Feature),
            armor("Light Vest", json!(2)),
            Item::new("Binoculars", ItemKind::GeneralEquipment),
            Item::new("Machete", ItemKind::Armament),
            ritual("Decadence", json!(1)),
            ritual("Fear Skin", json!(3)),
            Item::new("Motorbike", ItemKind::Unknown),
        ];

        let buckets = ItemBuckets::classify(&items);
        assert_eq!(buckets.gear.len(), 1);
        assert_eq!(buckets.features.len(), 1);
        assert_eq!(buckets.armor.len(), 1);
        assert_eq!(buckets.general_equipment.len(), 1);
        assert_eq!(buckets.armament.len(), 1);
        assert_eq!(buckets.rituals.len(), 2);
        assert_eq!(buckets.rituals.get(circle(1))[0].name, "Decadence");
        assert_eq!(buckets.rituals.get(circle(3))[0].name, "Fear Skin");
        assert!(buckets.rituals.get(circle(2)).is_empty());
    }

    #[test]
    fn test_invalid_circle_is_excluded_everywhere() {
        let items = vec![
            ritual("Too Deep", json!(5)),
            ritual("Unwritten", json!("one")),
            Item::new("Blank", ItemKind::Ritual { circle: None }),
        ];
        let buckets = ItemBuckets::classify(&items);
        assert!(buckets.rituals.is_empty());
        assert!(buckets.gear.is_empty());
        assert!(buckets.features.is_empty());
    }

    #[test]
    fn test_fold_skips_non_numeric_defense() {
        let armor = vec![
            armor("Heavy Plate", json!("heavy")),
            armor("Vest", json!(3)),
            Item::new("Cloak", ItemKind::Armor { defense: None }),
        ];
        assert_eq!(fold_defense_bonus(&armor, 12), 15);
        assert_eq!(fold_defense_bonus(&armor[..1], 12), 12);
    }

    #[test]
    fn test_fold_saturates_on_huge_bonuses() {
        let armor = vec![
            armor("Bulwark", json!(i32::MAX)),
            armor("Bulwark", json!(i32::MAX)),
        ];
        assert_eq!(fold_defense_bonus(&armor, 10), i32::MAX);
    }

    #[test]
    fn test_whole_number_floats_are_bucketed_and_folded() {
        let buckets = ItemBuckets::classify(&[ritual("Decadence", json!(2.0))]);
        assert_eq!(buckets.rituals.get(circle(2)).len(), 1);
        assert_eq!(fold_defense_bonus(&[armor("Vest", json!(3.0))], 10), 13);
    }

    #[test]
    fn test_ritual_tiers_serialize_with_all_keys() {
        let buckets = ItemBuckets::classify(&[ritual("Decadence", json!(2))]);
        let value = serde_json::to_value(&buckets.rituals).expect("serialize tiers");
        let tiers = value.as_object().expect("tiers object");
        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers["1"], json!([]));
        assert_eq!(tiers["2"][0]["name"], json!("Decadence"));
    }
}
