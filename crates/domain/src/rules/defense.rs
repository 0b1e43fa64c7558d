//! Defense and Dodge.
//!
//! Defense is computed in passes: base from raw Agility, then armor bonuses
//! folded in (see [`super::items::fold_defense_bonus`]), then Dodge from the
//! post-armor value.

/// Defense before equipment.
pub const BASE_DEFENSE: i32 = 10;

/// Base Defense: 10 plus the raw Agility score (not its modifier).
pub fn base_defense(agility_score: i32) -> i32 {
    BASE_DEFENSE.saturating_add(agility_score)
}

/// Dodge: the post-armor Defense plus the Reflexes skill value.
pub fn dodge(defense: i32, reflexes_value: i32) -> i32 {
    defense.saturating_add(reflexes_value)
}
