//! Property-based tests for the describer.
//!
//! Abilities are generated from the builder constructors so every value is
//! well formed; the properties check totality, determinism and the list
//! grammar.

use ccg_abilities::abilities::StructuredAbility;
use ccg_abilities::describe::{combine, describe, effect_text};
use ccg_abilities::effects::{AbilityEffect, AttackModifier, HealAmount, StatKind};
use ccg_abilities::vocabulary::{
    AbilityCondition, AbilityCost, AbilityTarget, AbilityTrigger, Comparison, CounterKind,
    EffectDuration,
};
use proptest::prelude::*;

fn target_strategy() -> impl Strategy<Value = AbilityTarget> {
    prop_oneof![
        Just(AbilityTarget::SelfUnit),
        Just(AbilityTarget::Target),
        Just(AbilityTarget::TargetAlly),
        Just(AbilityTarget::TargetEnemy),
        Just(AbilityTarget::Attacker),
        Just(AbilityTarget::AllAllies),
        Just(AbilityTarget::AllEnemies),
        Just(AbilityTarget::AdjacentAllies),
        Just(AbilityTarget::AdjacentEnemies),
        Just(AbilityTarget::OtherAllies),
        Just(AbilityTarget::RandomAlly),
        Just(AbilityTarget::RandomEnemy),
        Just(AbilityTarget::AllUnits),
        Just(AbilityTarget::PlayerGardener),
        Just(AbilityTarget::OpponentGardener),
        "zz[a-z]{2,6}-[a-z]{3,8}".prop_map(AbilityTarget::Unknown),
    ]
}

fn trigger_strategy() -> impl Strategy<Value = AbilityTrigger> {
    prop_oneof![
        Just(AbilityTrigger::Passive),
        Just(AbilityTrigger::Activated),
        Just(AbilityTrigger::OnSummon),
        Just(AbilityTrigger::OnAttack),
        Just(AbilityTrigger::OnDamage),
        Just(AbilityTrigger::OnDeath),
        Just(AbilityTrigger::OnTurnStart),
        Just(AbilityTrigger::OnTurnEnd),
        Just(AbilityTrigger::OnAllyDeath),
    ]
}

fn duration_strategy() -> impl Strategy<Value = EffectDuration> {
    prop_oneof![
        Just(EffectDuration::Permanent),
        Just(EffectDuration::EndOfTurn),
        Just(EffectDuration::StartOfNextTurn),
        Just(EffectDuration::Instant),
        Just(EffectDuration::WhileOnField),
        Just(EffectDuration::NextAttack),
        Just(EffectDuration::ThisTurn),
    ]
}

fn counter_strategy() -> impl Strategy<Value = CounterKind> {
    prop_oneof![
        Just(CounterKind::Burn),
        Just(CounterKind::Spore),
        Just(CounterKind::Freeze),
        Just(CounterKind::Poison),
    ]
}

fn condition_strategy() -> impl Strategy<Value = AbilityCondition> {
    prop_oneof![
        Just(AbilityCondition::is_damaged()),
        Just(AbilityCondition::is_wilting()),
        (1i32..10).prop_map(AbilityCondition::health_below),
        (1i32..10).prop_map(AbilityCondition::cost_above),
        (1i32..10).prop_map(|n| AbilityCondition::turn_count(n, Comparison::LessEqual)),
        counter_strategy().prop_map(AbilityCondition::has_counter),
    ]
}

fn effect_strategy() -> impl Strategy<Value = AbilityEffect> {
    let base = prop_oneof![
        (target_strategy(), -5i32..=5)
            .prop_map(|(t, v)| AbilityEffect::modify_stats(t, StatKind::Both, v)),
        (target_strategy(), 0u32..10).prop_map(|(t, v)| AbilityEffect::damage(t, v)),
        (target_strategy(), 0u32..10).prop_map(|(t, v)| AbilityEffect::piercing_damage(t, v)),
        target_strategy().prop_map(|t| AbilityEffect::heal(t, HealAmount::Full)),
        (0u32..5).prop_map(AbilityEffect::draw),
        (target_strategy(), counter_strategy(), 0u32..5)
            .prop_map(|(t, c, v)| AbilityEffect::apply_counter(t, c, v)),
        target_strategy().prop_map(AbilityEffect::clear_counters),
        target_strategy()
            .prop_map(|t| AbilityEffect::attack_modification(t, AttackModifier::AttackTwice)),
        target_strategy().prop_map(AbilityEffect::destroy),
        (target_strategy(), 1u32..4).prop_map(|(t, v)| AbilityEffect::retaliation(t, v)),
        (0u32..5).prop_map(AbilityEffect::gain_nectar),
        target_strategy().prop_map(AbilityEffect::remove_summoning_sickness),
    ];
    (
        base,
        proptest::option::of(duration_strategy()),
        proptest::option::of(condition_strategy()),
    )
        .prop_map(|(effect, duration, condition)| {
            let effect = match duration {
                Some(d) => effect.lasting(d),
                None => effect,
            };
            match condition {
                Some(c) => effect.when(c),
                None => effect,
            }
        })
}

fn cost_strategy() -> impl Strategy<Value = AbilityCost> {
    prop_oneof![
        (1u32..4).prop_map(AbilityCost::nectar),
        (1u32..4).prop_map(AbilityCost::discard),
        (1u32..4).prop_map(AbilityCost::sacrifice),
        (counter_strategy(), 1u32..4).prop_map(|(c, v)| AbilityCost::remove_counter(c, v)),
    ]
}

fn ability_strategy() -> impl Strategy<Value = StructuredAbility> {
    (
        "[A-Z][a-z]{2,10}",
        proptest::option::of(trigger_strategy()),
        proptest::option::of(cost_strategy()),
        prop::collection::vec(effect_strategy(), 0..5),
        proptest::option::of(1u32..4),
        proptest::option::of(1u32..4),
    )
        .prop_map(|(name, trigger, cost, effects, per_turn, per_game)| {
            let mut ability = StructuredAbility::new(name).with_effects(effects);
            ability.trigger = trigger;
            ability.cost = cost;
            ability.max_uses_per_turn = per_turn;
            ability.max_uses_per_game = per_game;
            ability
        })
}

proptest! {
    #[test]
    fn prop_effect_text_total(effect in effect_strategy()) {
        let text = effect_text(&effect);
        prop_assert!(!text.is_empty());
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert!(!text.contains("  "));
    }

    #[test]
    fn prop_describe_deterministic_and_clean(ability in ability_strategy()) {
        let first = describe(&ability);
        let second = describe(&ability.clone());
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.is_empty());
        prop_assert_eq!(first.trim(), first.as_str());
        prop_assert!(!first.contains("  "));
    }

    #[test]
    fn prop_describe_survives_json(ability in ability_strategy()) {
        let json = serde_json::to_string(&ability).unwrap();
        let reloaded: StructuredAbility = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(describe(&reloaded), describe(&ability));
    }

    #[test]
    fn prop_bare_ability_renders_name(name in "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?") {
        let ability = StructuredAbility::new(name.clone());
        prop_assert_eq!(describe(&ability), name);
    }

    #[test]
    fn prop_combine_laws(parts in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let joined = combine(&parts);
        match parts.len() {
            0 => prop_assert_eq!(joined, ""),
            1 => prop_assert_eq!(&joined, &parts[0]),
            2 => prop_assert_eq!(joined, format!("{} and {}", parts[0], parts[1])),
            n => {
                let head = parts[..n - 1].join(", ");
                prop_assert_eq!(joined, format!("{head}, and {}", parts[n - 1]));
            }
        }
    }

    #[test]
    fn prop_counter_noun_agrees(value in 0u32..10, counter in counter_strategy()) {
        let effect = AbilityEffect::apply_counter(AbilityTarget::SelfUnit, counter, value);
        let text = effect_text(&effect);
        if value > 1 {
            prop_assert!(text.contains("counters on"), "{}", text);
        } else {
            prop_assert!(text.contains("counter on"), "{}", text);
        }
    }
}
