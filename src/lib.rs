//! # ccg-abilities
//!
//! Declarative card-ability vocabulary and a deterministic renderer from
//! structured abilities to English rules text.
//!
//! ## Design Principles
//!
//! 1. **Data, not code**: Abilities are plain values built from closed
//!    vocabularies. A battle engine and this renderer read the same data.
//!
//! 2. **Total rendering**: Every well-formed ability renders. Unknown tags
//!    degrade to their raw spelling and an ability with nothing to say
//!    renders as its name.
//!
//! 3. **Pure functions**: Rendering has no side effects beyond logging and
//!    produces the same text for the same input.
//!
//! ## Modules
//!
//! - `vocabulary`: Triggers, targets, durations, conditions, costs, tags
//! - `effects`: The effect union and its per-kind payloads
//! - `abilities`: Structured abilities, the catalog and authoring audit
//! - `describe`: Resolvers, effect clauses, list grammar, the describer
//! - `error`: Catalog errors

pub mod abilities;
pub mod describe;
pub mod effects;
pub mod error;
pub mod vocabulary;

// Re-export commonly used types
pub use crate::vocabulary::{
    AbilityCondition, AbilityCost, AbilityTarget, AbilityTrigger, Affinity, CardKind,
    Comparison, ConditionKind, ConditionValue, CounterKind, EffectDuration, Resource,
};

pub use crate::effects::{AbilityEffect, DamageAmount, EffectType, Formula, HealAmount, StatKind};

pub use crate::abilities::{audit, AbilityCatalog, AbilityIssue, StructuredAbility};

pub use crate::describe::{combine, describe, effect_text, DescribeConfig, Describer};

pub use crate::error::CatalogError;
