//! Vocabulary resolvers: enumeration value → English fragment.
//!
//! Every resolver is total. Absent optional concepts and implicit values
//! (`Passive`, `while-on-field`) resolve to an empty string; tags without a
//! phrase echo the raw tag so a missing mapping shows up in the text
//! instead of failing.

use log::debug;

use crate::vocabulary::{
    AbilityCondition, AbilityCost, AbilityTarget, AbilityTrigger, Comparison, ConditionKind,
    ConditionValue, EffectDuration,
};

use super::combine::count_noun;

/// Prefix for an ability's trigger, e.g. `"When summoned,"`.
pub fn trigger_text(trigger: Option<&AbilityTrigger>) -> &'static str {
    let Some(trigger) = trigger else {
        return "";
    };
    match trigger {
        AbilityTrigger::Passive | AbilityTrigger::Activated => "",
        AbilityTrigger::OnSummon => "When summoned,",
        AbilityTrigger::OnAttack => "When attacking,",
        AbilityTrigger::OnDamage => "When attacked,",
        AbilityTrigger::OnDealDamage => "When dealing damage,",
        AbilityTrigger::OnDeath => "When destroyed,",
        AbilityTrigger::OnHeal => "When healed,",
        AbilityTrigger::OnTurnStart => "At start of turn,",
        AbilityTrigger::OnTurnEnd => "At end of turn,",
        AbilityTrigger::OnAllySummon => "When an ally is summoned,",
        AbilityTrigger::OnAllyDeath => "When an ally is destroyed,",
        AbilityTrigger::OnEnemySummon => "When an enemy is summoned,",
        AbilityTrigger::OnSpellCast => "When a spell is cast,",
        AbilityTrigger::Unknown(tag) => {
            debug!("no phrase for trigger `{tag}`, omitting prefix");
            ""
        }
    }
}

/// Prefix for an activation cost, e.g. `"Discard 2 cards:"`.
pub fn cost_text(cost: Option<&AbilityCost>) -> String {
    let Some(cost) = cost else {
        return String::new();
    };
    let amount = cost.amount();
    match cost {
        AbilityCost::Nectar { .. } => format!("Pay {amount} nectar:"),
        AbilityCost::Discard { .. } => format!("Discard {}:", count_noun(amount, "card", "cards")),
        AbilityCost::Sacrifice { .. } if amount == 1 => "Sacrifice an ally:".to_string(),
        AbilityCost::Sacrifice { .. } => format!("Sacrifice {amount} allies:"),
        AbilityCost::RemoveCounter { counter, .. } => {
            let noun = if amount == 1 { "counter" } else { "counters" };
            format!("Remove {amount} {counter} {noun}:")
        }
    }
}

/// Noun phrase for a target scope, e.g. `"all allies"`.
pub fn target_text(target: &AbilityTarget) -> &str {
    match target {
        AbilityTarget::SelfUnit => "this",
        AbilityTarget::Target => "target Beast",
        AbilityTarget::TargetAlly => "target ally",
        AbilityTarget::TargetEnemy => "target enemy",
        AbilityTarget::Attacker => "attacker",
        AbilityTarget::AllAllies => "all allies",
        AbilityTarget::AllEnemies => "all enemies",
        AbilityTarget::AdjacentAllies => "adjacent allies",
        AbilityTarget::AdjacentEnemies => "adjacent enemies",
        AbilityTarget::OtherAllies => "other allies",
        AbilityTarget::RandomAlly => "a random ally",
        AbilityTarget::RandomEnemy => "a random enemy",
        AbilityTarget::AllUnits => "all Beasts",
        AbilityTarget::PlayerGardener => "you",
        AbilityTarget::OpponentGardener => "opponent",
        AbilityTarget::Unknown(tag) => {
            debug!("no phrase for target `{tag}`, using raw tag");
            tag
        }
    }
}

/// Trailing duration clause, e.g. `"until end of turn"`.
///
/// One-shot and while-on-field effects are the ambient case and add
/// nothing.
pub fn duration_text(duration: Option<EffectDuration>) -> &'static str {
    match duration {
        Some(EffectDuration::Permanent) => "permanently",
        Some(EffectDuration::EndOfTurn) => "until end of turn",
        Some(EffectDuration::StartOfNextTurn) => "until start of next turn",
        Some(EffectDuration::ThisTurn) => "this turn",
        Some(EffectDuration::NextAttack) => "for next attack",
        Some(EffectDuration::Instant) | Some(EffectDuration::WhileOnField) | None => "",
    }
}

/// Trailing condition clause, e.g. `"if HP < 3"`.
pub fn condition_text(condition: Option<&AbilityCondition>) -> String {
    let Some(condition) = condition else {
        return String::new();
    };
    match condition.kind {
        ConditionKind::HasCounter => match &condition.value {
            Some(ConditionValue::Counter(counter)) => format!("if it has a {counter} counter"),
            _ => "if it has counters".to_string(),
        },
        ConditionKind::AffinityMatches => match &condition.value {
            Some(ConditionValue::Affinity(affinity)) => format!("if {affinity}"),
            _ => "if affinity matches".to_string(),
        },
        ConditionKind::IsDamaged => "if damaged".to_string(),
        ConditionKind::IsWilting => "if Wilting".to_string(),
        ConditionKind::HealthBelow => with_number(condition, |n| format!("if HP < {n}")),
        ConditionKind::HealthAbove => with_number(condition, |n| format!("if HP > {n}")),
        ConditionKind::CostAbove => with_number(condition, |n| format!("if Cost {n}+")),
        ConditionKind::CostBelow => with_number(condition, |n| format!("if Cost < {n}")),
        ConditionKind::TurnCount => with_comparison(condition, "turn"),
        ConditionKind::UnitsOnField => with_comparison(condition, "units on field"),
        ConditionKind::ResourceAvailable => with_comparison(condition, "nectar"),
    }
}

fn with_number(condition: &AbilityCondition, render: impl FnOnce(i32) -> String) -> String {
    match condition.numeric_value() {
        Some(n) => render(n),
        None => {
            debug!(
                "numeric condition `{}` has no number, using raw tag",
                condition.kind.as_str()
            );
            format!("if {}", condition.kind.as_str())
        }
    }
}

fn with_comparison(condition: &AbilityCondition, subject: &str) -> String {
    let op = condition
        .effective_comparison()
        .unwrap_or(Comparison::GreaterEqual);
    with_number(condition, |n| format!("if {subject} {} {n}", op.symbol()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{Affinity, CounterKind};

    #[test]
    fn test_trigger_text() {
        assert_eq!(trigger_text(Some(&AbilityTrigger::OnSummon)), "When summoned,");
        assert_eq!(trigger_text(Some(&AbilityTrigger::OnDamage)), "When attacked,");
        assert_eq!(trigger_text(Some(&AbilityTrigger::Passive)), "");
        assert_eq!(trigger_text(Some(&AbilityTrigger::Activated)), "");
        assert_eq!(trigger_text(None), "");
        assert_eq!(
            trigger_text(Some(&AbilityTrigger::Unknown("OnBloom".to_string()))),
            ""
        );
    }

    #[test]
    fn test_cost_text_pluralizes() {
        assert_eq!(cost_text(Some(&AbilityCost::discard(1))), "Discard 1 card:");
        assert_eq!(cost_text(Some(&AbilityCost::discard(2))), "Discard 2 cards:");
        assert_eq!(cost_text(Some(&AbilityCost::Discard { value: None })), "Discard 1 card:");
        assert_eq!(cost_text(Some(&AbilityCost::sacrifice(1))), "Sacrifice an ally:");
        assert_eq!(cost_text(Some(&AbilityCost::sacrifice(2))), "Sacrifice 2 allies:");
        assert_eq!(cost_text(Some(&AbilityCost::nectar(3))), "Pay 3 nectar:");
        assert_eq!(
            cost_text(Some(&AbilityCost::remove_counter(CounterKind::Spore, 2))),
            "Remove 2 Spore counters:"
        );
        assert_eq!(cost_text(None), "");
    }

    #[test]
    fn test_target_text() {
        assert_eq!(target_text(&AbilityTarget::SelfUnit), "this");
        assert_eq!(target_text(&AbilityTarget::AllAllies), "all allies");
        assert_eq!(target_text(&AbilityTarget::OpponentGardener), "opponent");
        assert_eq!(target_text(&AbilityTarget::AllUnits), "all Beasts");
        assert_eq!(
            target_text(&AbilityTarget::Unknown("front-enemy".to_string())),
            "front-enemy"
        );
    }

    #[test]
    fn test_duration_text() {
        assert_eq!(duration_text(Some(EffectDuration::Permanent)), "permanently");
        assert_eq!(duration_text(Some(EffectDuration::EndOfTurn)), "until end of turn");
        assert_eq!(duration_text(Some(EffectDuration::WhileOnField)), "");
        assert_eq!(duration_text(Some(EffectDuration::Instant)), "");
        assert_eq!(duration_text(None), "");
    }

    #[test]
    fn test_condition_text() {
        assert_eq!(condition_text(None), "");
        assert_eq!(condition_text(Some(&AbilityCondition::is_damaged())), "if damaged");
        assert_eq!(condition_text(Some(&AbilityCondition::is_wilting())), "if Wilting");
        assert_eq!(condition_text(Some(&AbilityCondition::health_below(3))), "if HP < 3");
        assert_eq!(condition_text(Some(&AbilityCondition::cost_above(4))), "if Cost 4+");
        assert_eq!(
            condition_text(Some(&AbilityCondition::has_counter(CounterKind::Burn))),
            "if it has a Burn counter"
        );
        assert_eq!(
            condition_text(Some(&AbilityCondition::affinity(Affinity::Water))),
            "if Water"
        );
    }

    #[test]
    fn test_condition_comparisons() {
        assert_eq!(
            condition_text(Some(&AbilityCondition::turn_count(3, Comparison::Equal))),
            "if turn = 3"
        );
        assert_eq!(
            condition_text(Some(&AbilityCondition::resource_available(2))),
            "if nectar >= 2"
        );
        // Comparison is ignored for non-numeric operands.
        let cond = AbilityCondition::affinity(Affinity::Fire).compared(Comparison::Less);
        assert_eq!(condition_text(Some(&cond)), "if Fire");
    }

    #[test]
    fn test_numeric_condition_without_number() {
        let cond = AbilityCondition::new(ConditionKind::HealthBelow);
        assert_eq!(condition_text(Some(&cond)), "if health-below");
    }
}
