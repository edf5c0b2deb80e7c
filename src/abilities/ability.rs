//! Structured abilities - the aggregate authored on card definitions.
//!
//! A `StructuredAbility` bundles a trigger, an optional cost, an ordered
//! list of effects and optional usage caps. It is authored once and never
//! mutated; renderers may read it any number of times.

use serde::{Deserialize, Serialize};

use crate::effects::{AbilityEffect, EffectType};
use crate::vocabulary::{AbilityCost, AbilityTrigger};

/// A named ability.
///
/// ## Example
///
/// ```
/// use ccg_abilities::abilities::StructuredAbility;
/// use ccg_abilities::effects::AbilityEffect;
/// use ccg_abilities::vocabulary::{AbilityTarget, AbilityTrigger};
///
/// let ability = StructuredAbility::new("Flame Retaliation")
///     .with_trigger(AbilityTrigger::OnDamage)
///     .with_effect(AbilityEffect::retaliation(AbilityTarget::Attacker, 1));
///
/// assert_eq!(ability.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAbility {
    pub name: String,

    /// Authored description text. May be stale; see `audit`.
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<AbilityTrigger>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<AbilityCost>,

    /// Applied in order.
    #[serde(default)]
    pub effects: Vec<AbilityEffect>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses_per_turn: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses_per_game: Option<u32>,
}

impl StructuredAbility {
    /// Create an ability with no trigger, cost, effects or caps.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            trigger: None,
            cost: None,
            effects: Vec::new(),
            max_uses_per_turn: None,
            max_uses_per_game: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: AbilityTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: AbilityCost) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: AbilityEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append several effects (builder pattern).
    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = AbilityEffect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Cap uses per turn.
    #[must_use]
    pub fn per_turn(mut self, uses: u32) -> Self {
        self.max_uses_per_turn = Some(uses);
        self
    }

    /// Cap uses per game.
    #[must_use]
    pub fn per_game(mut self, uses: u32) -> Self {
        self.max_uses_per_game = Some(uses);
        self
    }

    /// Whether the ability has any effect at all.
    pub fn does_something(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Effect types in order.
    pub fn effect_types(&self) -> impl Iterator<Item = EffectType> + '_ {
        self.effects.iter().map(AbilityEffect::effect_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::AbilityTarget;

    #[test]
    fn test_builder() {
        let ability = StructuredAbility::new("Cleansing Downpour")
            .with_trigger(AbilityTrigger::OnSummon)
            .with_effects([
                AbilityEffect::clear_counters(AbilityTarget::AllUnits),
                AbilityEffect::draw(1),
            ])
            .per_turn(1);

        assert_eq!(ability.name, "Cleansing Downpour");
        assert!(ability.does_something());
        assert_eq!(
            ability.effect_types().collect::<Vec<_>>(),
            vec![EffectType::RemoveCounter, EffectType::DrawCards]
        );
        assert_eq!(ability.max_uses_per_turn, Some(1));
        assert_eq!(ability.max_uses_per_game, None);
    }

    #[test]
    fn test_minimal_json() {
        let ability: StructuredAbility = serde_json::from_str(r#"{"name":"Dormant"}"#).unwrap();
        assert_eq!(ability, StructuredAbility::new("Dormant"));
        assert!(!ability.does_something());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "name": "Overgrowth",
            "description": "",
            "trigger": "Activated",
            "cost": {"type": "nectar", "value": 2},
            "effects": [{"type": "draw-cards", "target": "player-gardener", "value": 1}],
            "maxUsesPerTurn": 1,
            "maxUsesPerGame": 3
        }"#;
        let ability: StructuredAbility = serde_json::from_str(json).unwrap();
        assert_eq!(ability.trigger, Some(AbilityTrigger::Activated));
        assert_eq!(ability.cost, Some(AbilityCost::nectar(2)));
        assert_eq!(ability.max_uses_per_turn, Some(1));
        assert_eq!(ability.max_uses_per_game, Some(3));
    }

    #[test]
    fn test_ability_serialization() {
        let ability = StructuredAbility::new("Quick Strike")
            .with_trigger(AbilityTrigger::Passive)
            .with_effect(AbilityEffect::remove_summoning_sickness(AbilityTarget::SelfUnit));

        let json = serde_json::to_string(&ability).unwrap();
        let deserialized: StructuredAbility = serde_json::from_str(&json).unwrap();
        assert_eq!(ability, deserialized);
    }
}
