//! Ability vocabulary: the closed enumerations abilities are built from.
//!
//! - [`AbilityTrigger`]: the event that fires an ability
//! - [`AbilityTarget`]: the symbolic scope an effect applies to
//! - [`EffectDuration`]: how long an effect persists
//! - [`AbilityCondition`]: a gate on a single effect
//! - [`AbilityCost`]: what an activated ability costs
//! - Tags: counters, affinities, card kinds and resources
//!
//! ## Open vocabularies
//!
//! Triggers, targets and counters keep an `Unknown(String)` variant so data
//! authored against a newer vocabulary still loads. Renderers echo the raw
//! tag for these instead of failing.

mod condition;
mod cost;
mod duration;
mod tags;
mod target;
mod trigger;

pub use condition::{AbilityCondition, Comparison, ConditionKind, ConditionValue};
pub use cost::AbilityCost;
pub use duration::EffectDuration;
pub use tags::{Affinity, CardKind, CounterKind, Resource};
pub use target::AbilityTarget;
pub use trigger::AbilityTrigger;
