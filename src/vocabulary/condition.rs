//! Effect conditions.
//!
//! A condition gates a single effect: the effect only applies while the
//! condition holds. This crate only describes conditions; evaluating them
//! against a live board is the battle engine's job.

use serde::{Deserialize, Serialize};

use super::tags::{Affinity, CounterKind};

/// The kind of check a condition performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionKind {
    HasCounter,
    HealthBelow,
    HealthAbove,
    CostAbove,
    CostBelow,
    AffinityMatches,
    IsDamaged,
    IsWilting,
    TurnCount,
    UnitsOnField,
    ResourceAvailable,
}

impl ConditionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ConditionKind::HasCounter => "has-counter",
            ConditionKind::HealthBelow => "health-below",
            ConditionKind::HealthAbove => "health-above",
            ConditionKind::CostAbove => "cost-above",
            ConditionKind::CostBelow => "cost-below",
            ConditionKind::AffinityMatches => "affinity-matches",
            ConditionKind::IsDamaged => "is-damaged",
            ConditionKind::IsWilting => "is-wilting",
            ConditionKind::TurnCount => "turn-count",
            ConditionKind::UnitsOnField => "units-on-field",
            ConditionKind::ResourceAvailable => "resource-available",
        }
    }

    /// Whether this kind compares against a number.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ConditionKind::HealthBelow
                | ConditionKind::HealthAbove
                | ConditionKind::CostAbove
                | ConditionKind::CostBelow
                | ConditionKind::TurnCount
                | ConditionKind::UnitsOnField
                | ConditionKind::ResourceAvailable
        )
    }

    /// Whether the rendered clause reads the `comparison` field.
    ///
    /// Threshold kinds (`health-below`, `cost-above`, ...) carry their own
    /// fixed operator.
    pub const fn takes_comparison(self) -> bool {
        matches!(
            self,
            ConditionKind::TurnCount
                | ConditionKind::UnitsOnField
                | ConditionKind::ResourceAvailable
        )
    }
}

/// Comparison operator for numeric conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    Equal,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    pub const fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::GreaterEqual => ">=",
            Comparison::LessEqual => "<=",
        }
    }
}

/// The operand of a condition.
///
/// Untagged: numbers load as `Number`, affinity names as `Affinity`, and
/// any other string as a counter tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(i32),
    Affinity(Affinity),
    Counter(CounterKind),
}

impl From<i32> for ConditionValue {
    fn from(v: i32) -> Self {
        ConditionValue::Number(v)
    }
}

impl From<Affinity> for ConditionValue {
    fn from(v: Affinity) -> Self {
        ConditionValue::Affinity(v)
    }
}

impl From<CounterKind> for ConditionValue {
    fn from(v: CounterKind) -> Self {
        ConditionValue::Counter(v)
    }
}

/// A gate that must hold for an effect to apply.
///
/// `comparison` is only meaningful when `value` is numeric; string-valued
/// conditions ignore it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityCondition {
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

impl AbilityCondition {
    /// Create a condition with no operand.
    pub fn new(kind: ConditionKind) -> Self {
        Self {
            kind,
            value: None,
            comparison: None,
        }
    }

    /// Set the operand (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<ConditionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the comparison operator (builder pattern).
    #[must_use]
    pub fn compared(mut self, comparison: Comparison) -> Self {
        self.comparison = Some(comparison);
        self
    }

    pub fn has_counter(counter: CounterKind) -> Self {
        Self::new(ConditionKind::HasCounter).with_value(counter)
    }

    pub fn health_below(hp: i32) -> Self {
        Self::new(ConditionKind::HealthBelow).with_value(hp)
    }

    pub fn health_above(hp: i32) -> Self {
        Self::new(ConditionKind::HealthAbove).with_value(hp)
    }

    pub fn cost_above(cost: i32) -> Self {
        Self::new(ConditionKind::CostAbove).with_value(cost)
    }

    pub fn cost_below(cost: i32) -> Self {
        Self::new(ConditionKind::CostBelow).with_value(cost)
    }

    pub fn affinity(affinity: Affinity) -> Self {
        Self::new(ConditionKind::AffinityMatches).with_value(affinity)
    }

    pub fn is_damaged() -> Self {
        Self::new(ConditionKind::IsDamaged)
    }

    pub fn is_wilting() -> Self {
        Self::new(ConditionKind::IsWilting)
    }

    pub fn turn_count(turn: i32, comparison: Comparison) -> Self {
        Self::new(ConditionKind::TurnCount)
            .with_value(turn)
            .compared(comparison)
    }

    pub fn units_on_field(count: i32, comparison: Comparison) -> Self {
        Self::new(ConditionKind::UnitsOnField)
            .with_value(count)
            .compared(comparison)
    }

    pub fn resource_available(amount: i32) -> Self {
        Self::new(ConditionKind::ResourceAvailable).with_value(amount)
    }

    /// The operand if it is a number.
    pub fn numeric_value(&self) -> Option<i32> {
        match self.value {
            Some(ConditionValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The comparison, honored only for numeric operands of kinds that
    /// take one.
    pub fn effective_comparison(&self) -> Option<Comparison> {
        if !self.kind.takes_comparison() {
            return None;
        }
        self.numeric_value().and(self.comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let cond = AbilityCondition::health_below(3);
        assert_eq!(cond.kind, ConditionKind::HealthBelow);
        assert_eq!(cond.numeric_value(), Some(3));
        assert_eq!(cond.comparison, None);

        let cond = AbilityCondition::turn_count(4, Comparison::GreaterEqual);
        assert_eq!(cond.effective_comparison(), Some(Comparison::GreaterEqual));
    }

    #[test]
    fn test_comparison_ignored_for_tags() {
        let cond = AbilityCondition::affinity(Affinity::Fire).compared(Comparison::Greater);
        assert_eq!(cond.numeric_value(), None);
        assert_eq!(cond.effective_comparison(), None);
    }

    #[test]
    fn test_comparison_ignored_for_threshold_kinds() {
        let cond = AbilityCondition::health_below(3).compared(Comparison::Equal);
        assert_eq!(cond.numeric_value(), Some(3));
        assert_eq!(cond.effective_comparison(), None);

        assert!(ConditionKind::UnitsOnField.takes_comparison());
        assert!(!ConditionKind::CostAbove.takes_comparison());
        assert!(!ConditionKind::IsDamaged.takes_comparison());
    }

    #[test]
    fn test_value_resolution() {
        let n: ConditionValue = serde_json::from_str("3").unwrap();
        assert_eq!(n, ConditionValue::Number(3));

        let a: ConditionValue = serde_json::from_str("\"water\"").unwrap();
        assert_eq!(a, ConditionValue::Affinity(Affinity::Water));

        let c: ConditionValue = serde_json::from_str("\"spore\"").unwrap();
        assert_eq!(c, ConditionValue::Counter(CounterKind::Spore));
    }

    #[test]
    fn test_numeric_kinds() {
        assert!(ConditionKind::CostAbove.is_numeric());
        assert!(ConditionKind::TurnCount.is_numeric());
        assert!(!ConditionKind::HasCounter.is_numeric());
        assert!(!ConditionKind::IsWilting.is_numeric());
    }

    #[test]
    fn test_condition_serialization() {
        let json = r#"{"type":"cost-above","value":3}"#;
        let cond: AbilityCondition = serde_json::from_str(json).unwrap();
        assert_eq!(cond, AbilityCondition::cost_above(3));
        assert_eq!(serde_json::to_string(&cond).unwrap(), json);
    }
}
