//! Agent sheet preparation.
//!
//! Composes the derivation rules into a [`DerivedView`] for one Agent and its
//! items. The input snapshot is borrowed immutably; nothing is written back.

mod config;
mod view;

pub use config::SheetConfig;
pub use view::{AttributeView, DerivedView, RollContext, SkillView};

use std::collections::BTreeMap;

use crate::entities::{Agent, Defense, Item, ResourcePool, Resources};
use crate::error::DomainError;
use crate::rules::{
    base_defense, build_skill_roll, dodge, fold_defense_bonus, progression_rank,
    resource_maximums, ItemBuckets,
};
use crate::value_objects::{Attribute, SkillKey};

/// Builds derived Agent sheets with a fixed label configuration.
#[derive(Debug, Clone, Default)]
pub struct AgentSheet {
    config: SheetConfig,
}

impl AgentSheet {
    pub fn new(config: SheetConfig) -> Self {
        Self { config }
    }

    /// Derive the full sheet for an Agent and its items.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the Agent's NEX is negative.
    /// Malformed items never fail the sheet; they are left out.
    pub fn prepare(&self, agent: &Agent, items: &[Item]) -> Result<DerivedView, DomainError> {
        let rank = progression_rank(agent.nex)?;

        let attributes = Attribute::all()
            .into_iter()
            .map(|attribute| {
                let view = AttributeView {
                    score: agent.attributes.score(attribute),
                    modifier: agent.attributes.modifier(attribute),
                    label: self.config.ability_label(attribute).to_string(),
                };
                (attribute, view)
            })
            .collect();

        let maximums = resource_maximums(agent.class, rank, &agent.attributes);
        let resources = Resources {
            health: ResourcePool {
                current: agent.resources.health.current,
                max: maximums.health,
            },
            effort: ResourcePool {
                current: agent.resources.effort.current,
                max: maximums.effort,
            },
            sanity: ResourcePool {
                current: agent.resources.sanity.current,
                max: maximums.sanity,
            },
        };

        let items = ItemBuckets::classify(items);

        // Armor is folded in before Dodge reads the Defense value
        let defense_value = fold_defense_bonus(&items.armor, base_defense(agent.attributes.agility));
        let reflexes = agent
            .skill(SkillKey::Reflexes)
            .map(|skill| skill.value)
            .unwrap_or(0);
        let defense = Defense {
            value: defense_value,
            dodge: dodge(defense_value, reflexes),
        };

        let skills: BTreeMap<SkillKey, SkillView> = agent
            .skills
            .iter()
            .map(|(key, skill)| {
                let roll = build_skill_roll(self.config.skill_label(*key), skill);
                let view = SkillView {
                    value: skill.value,
                    modifier: skill.modifier,
                    trained: skill.conditions.trained,
                    burden: skill.conditions.burden,
                    governing_attribute_advantage: skill.governing_attribute_advantage,
                    label: roll.label,
                    formula: roll.formula.to_string(),
                };
                (*key, view)
            })
            .collect();

        tracing::debug!(
            agent_id = %agent.id,
            class = %agent.class,
            rank = %rank,
            health_max = resources.health.max,
            effort_max = resources.effort.max,
            sanity_max = resources.sanity.max,
            defense = defense.value,
            dodge = defense.dodge,
            skills = skills.len(),
            "Prepared agent sheet"
        );

        Ok(DerivedView {
            agent_id: agent.id,
            name: agent.name.clone(),
            class: agent.class,
            nex: agent.nex,
            rank,
            attributes,
            resources,
            effort_per_round: rank.effort_per_round(),
            defense,
            skills,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AgentClass, ItemKind};
    use crate::value_objects::{Skill, SkillConditions};
    use serde_json::json;

    fn agent() -> Agent {
        let mut agent = Agent::new("Dante", AgentClass::Combatant);
        agent.nex = 10;
        agent.attributes.agility = 2;
        agent.attributes.vigor = 14;
        agent.attributes.presence = 12;
        agent.skills.insert(
            SkillKey::Reflexes,
            Skill {
                value: 1,
                ..Skill::default()
            },
        );
        agent.skills.insert(
            SkillKey::Fighting,
            Skill {
                value: 5,
                modifier: 1,
                conditions: SkillConditions {
                    trained: true,
                    burden: false,
                },
                governing_attribute_advantage: 2,
            },
        );
        agent.resources.health.current = 17;
        agent.resources.health.max = 999;
        agent
    }

    fn items() -> Vec<Item> {
        vec![
            Item::new("Vest", ItemKind::Armor { defense: Some(json!(3)) }),
            Item::new("Heavy Plate", ItemKind::Armor { defense: Some(json!("heavy")) }),
            Item::new("Decadence", ItemKind::Ritual { circle: Some(json!(5)) }),
            Item::new("Machete", ItemKind::Armament),
        ]
    }

    #[test]
    fn test_defense_folds_armor_before_dodge() {
        let view = AgentSheet::default()
            .prepare(&agent(), &items())
            .expect("prepare sheet");
        assert_eq!(view.defense.value, 15);
        assert_eq!(view.defense.dodge, 16);
    }

    #[test]
    fn test_resources_are_derived_and_current_is_kept() {
        let view = AgentSheet::default()
            .prepare(&agent(), &[])
            .expect("prepare sheet");
        // NEX 10 is rank 2: one growth step
        assert_eq!(view.rank.value(), 2);
        assert_eq!(view.effort_per_round, 2);
        assert_eq!(view.resources.health, ResourcePool { current: 17, max: 28 });
        assert_eq!(view.resources.effort.max, 6);
        assert_eq!(view.resources.sanity.max, 15);
    }

    #[test]
    fn test_skill_views_carry_label_and_formula() {
        let view = AgentSheet::default()
            .prepare(&agent(), &[])
            .expect("prepare sheet");
        let fighting = &view.skills[&SkillKey::Fighting];
        assert_eq!(fighting.modifier, 1);
        assert_eq!(fighting.label, "Fighting*");
        assert_eq!(fighting.formula, "2d20kh+5+1");

        let reflexes = &view.skills[&SkillKey::Reflexes];
        assert_eq!(reflexes.modifier, 0);
        assert_eq!(reflexes.label, "Reflexes");
        assert_eq!(reflexes.formula, "2d20kl+1");
        assert!(!view.skills.contains_key(&SkillKey::Will));
    }

    #[test]
    fn test_skill_modifier_is_taken_from_the_record() {
        let agent: Agent = serde_json::from_value(json!({
            "name": "Kaiser",
            "skills": {
                "luta": {"value": 3, "mod": 1, "conditions": {"trained": true}},
                "furtividade": {"conditions": {"carga": true}, "governingAttributeAdvantage": 1},
                "vontade": {}
            }
        }))
        .expect("parse agent");
        let view = AgentSheet::default()
            .prepare(&agent, &[])
            .expect("prepare sheet");

        let fighting = &view.skills[&SkillKey::Fighting];
        assert_eq!(fighting.label, "Fighting*");
        assert_eq!(fighting.formula, "2d20kl+3+1");
        assert_eq!(fighting.modifier, 1);

        let stealth = &view.skills[&SkillKey::Stealth];
        assert_eq!(stealth.label, "Stealth+");
        assert_eq!(stealth.formula, "1d20kh");

        assert_eq!(view.skills[&SkillKey::Will].formula, "2d20kl");
    }

    #[test]
    fn test_whole_number_float_payloads_count() {
        let items: Vec<Item> = serde_json::from_value(json!([
            {"name": "Vest", "type": "armor", "defense": 3.0},
            {"name": "Decadence", "type": "ritual", "circle": 2.0}
        ]))
        .expect("parse items");
        let mut agent = Agent::new("Liz", AgentClass::Occultist);
        agent.attributes.agility = 0;
        let view = AgentSheet::default()
            .prepare(&agent, &items)
            .expect("prepare sheet");
        assert_eq!(view.defense.value, 13);
        assert_eq!(view.items.rituals.len(), 1);
    }

    #[test]
    fn test_extreme_values_saturate_instead_of_panicking() {
        let items: Vec<Item> = serde_json::from_value(json!([
            {"name": "Aegis", "type": "armor", "defense": 2147483647},
            {"name": "Aegis II", "type": "armor", "defense": 2147483647}
        ]))
        .expect("parse items");
        let mut agent = Agent::new("Titan", AgentClass::Combatant);
        agent.nex = 99;
        agent.attributes.agility = i32::MAX;
        agent.attributes.vigor = i32::MIN;
        agent.attributes.presence = i32::MAX;
        agent.skills.insert(
            SkillKey::Reflexes,
            Skill {
                value: i32::MAX,
                ..Skill::default()
            },
        );
        let view = AgentSheet::default()
            .prepare(&agent, &items)
            .expect("prepare sheet");
        assert_eq!(view.defense.value, i32::MAX);
        assert_eq!(view.defense.dodge, i32::MAX);
        assert_eq!(view.resources.health.max, i32::MIN);
        assert_eq!(view.resources.effort.max, i32::MAX);
    }

    #[test]
    fn test_attribute_views() {
        let view = AgentSheet::default()
            .prepare(&agent(), &[])
            .expect("prepare sheet");
        let vigor = &view.attributes[&Attribute::Vigor];
        assert_eq!(vigor.score, 14);
        assert_eq!(vigor.modifier, 2);
        assert_eq!(vigor.label, "Vigor");
        assert_eq!(view.attributes.len(), 5);
    }

    #[test]
    fn test_items_are_bucketed() {
        let view = AgentSheet::default()
            .prepare(&agent(), &items())
            .expect("prepare sheet");
        assert_eq!(view.items.armor.len(), 2);
        assert_eq!(view.items.armament.len(), 1);
        assert!(view.items.rituals.is_empty());
    }

    #[test]
    fn test_prepare_is_idempotent_and_leaves_input_untouched() {
        let sheet = AgentSheet::default();
        let agent = agent();
        let items = items();
        let first = sheet.prepare(&agent, &items).expect("first prepare");
        let second = sheet.prepare(&agent, &items).expect("second prepare");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serialize first"),
            serde_json::to_string(&second).expect("serialize second")
        );
        assert_eq!(agent.resources.health.max, 999);
        assert_eq!(agent.defense, Defense::default());
    }

    #[test]
    fn test_negative_nex_fails() {
        let mut agent = agent();
        agent.nex = -5;
        let err = AgentSheet::default()
            .prepare(&agent, &[])
            .expect_err("negative nex");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_unknown_class_is_flat_ten() {
        let mut agent: Agent = serde_json::from_value(json!({
            "name": "Stranger",
            "class": "Wizard",
            "nex": 99,
            "attributes": {"vig": 20, "pre": 20}
        }))
        .expect("parse agent");
        agent.skills.clear();
        let view = AgentSheet::default()
            .prepare(&agent, &[])
            .expect("prepare sheet");
        assert_eq!(view.class, AgentClass::Unclassed);
        assert_eq!(view.resources.health.max, 10);
        assert_eq!(view.resources.effort.max, 10);
        assert_eq!(view.resources.sanity.max, 10);
        assert_eq!(view.effort_per_round, 20);
    }

    #[test]
    fn test_roll_context_mirrors_rank() {
        let view = AgentSheet::default()
            .prepare(&agent(), &[])
            .expect("prepare sheet");
        let ctx = view.roll_context();
        assert_eq!(ctx.level, 2);
        assert_eq!(ctx.resolve("@fighting.value"), Some(5));

        let fresh = Agent::new("Recruit", AgentClass::Specialist);
        let ctx = AgentSheet::default()
            .prepare(&fresh, &[])
            .expect("prepare sheet")
            .roll_context();
        assert_eq!(ctx.level, 0);
    }

    #[test]
    fn test_labels_come_from_config() {
        let config: SheetConfig = serde_json::from_value(json!({
            "skillLabels": {"luta": "Luta"},
            "abilityLabels": {"vig": "Vigor (VIG)"}
        }))
        .expect("parse config");
        let view = AgentSheet::new(config)
            .prepare(&agent(), &[])
            .expect("prepare sheet");
        assert_eq!(view.skills[&SkillKey::Fighting].label, "Luta*");
        assert_eq!(view.skills[&SkillKey::Reflexes].label, "reflexes");
        assert_eq!(view.attributes[&Attribute::Vigor].label, "Vigor (VIG)");
        assert_eq!(view.attributes[&Attribute::Agility].label, "agi");
    }
}
