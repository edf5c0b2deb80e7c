//! Authoring checks for structured abilities.
//!
//! Nothing here rejects data: the renderer copes with every finding below.
//! The audit points at abilities whose text will read oddly or whose
//! authored description has drifted from the structured data.

use thiserror::Error;

use crate::describe::describe;

use super::ability::StructuredAbility;

/// A single authoring finding. `effect` fields index into
/// [`StructuredAbility::effects`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AbilityIssue {
    #[error("ability has no effects")]
    EmptyEffects,

    #[error("effect {effect}: comparison is ignored by this condition")]
    IgnoredComparison { effect: usize },

    #[error("effect {effect}: numeric condition has no number")]
    MissingConditionValue { effect: usize },

    #[error("usage cap of 0 makes the ability unusable")]
    ZeroUsageCap,

    #[error("description is stale, generated text is `{expected}`")]
    StaleDescription { expected: String },
}

/// Check one ability. Findings come back in a stable order: ability-level
/// issues first, then per-effect issues by index, then the description.
pub fn audit(ability: &StructuredAbility) -> Vec<AbilityIssue> {
    let mut issues = Vec::new();

    if !ability.does_something() {
        issues.push(AbilityIssue::EmptyEffects);
    }
    if ability.max_uses_per_turn == Some(0) || ability.max_uses_per_game == Some(0) {
        issues.push(AbilityIssue::ZeroUsageCap);
    }

    for (effect, entry) in ability.effects.iter().enumerate() {
        let Some(condition) = entry.condition() else {
            continue;
        };
        if condition.comparison.is_some() && condition.effective_comparison().is_none() {
            issues.push(AbilityIssue::IgnoredComparison { effect });
        }
        if condition.kind.is_numeric() && condition.numeric_value().is_none() {
            issues.push(AbilityIssue::MissingConditionValue { effect });
        }
    }

    if !ability.description.is_empty() {
        let expected = describe(ability);
        if ability.description != expected {
            issues.push(AbilityIssue::StaleDescription { expected });
        }
    }

    issues
}
