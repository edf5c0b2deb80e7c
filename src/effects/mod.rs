//! Effect vocabulary for card abilities.
//!
//! Effects are the building blocks of abilities:
//! - [`AbilityEffect`]: closed union of every effect kind, tagged by `"type"`
//! - [`EffectType`]: the bare discriminant
//! - Per-kind payload structs (`DamageEffect`, `ImmunityEffect`, ...)
//! - [`DamageAmount`] / [`HealAmount`]: fixed, symbolic or computed values
//!
//! ## Design Philosophy
//!
//! Effects only describe what should happen. They never touch a board;
//! a battle engine reads the same values to mutate live game state.
//! Every effect shares the base fields `target`, `duration` and
//! `condition`, and adds only the fields its kind needs.

mod amount;
mod effect;
mod kinds;

pub use amount::{DamageAmount, Formula, HealAmount};
pub use effect::{AbilityEffect, EffectType};
pub use kinds::{
    ApplyCounterEffect, AttackModificationEffect, AttackModifier, BaseEffect,
    CannotBeTargetedEffect, DamageEffect, DamageReductionEffect, DiscardEffect, DrawCardsEffect,
    GainResourceEffect, HealEffect, ImmunityEffect, ImmunitySource, MoveDestination, MoveEffect,
    PreventDamageEffect, RedirectDamageEffect, RemoveCounterEffect, RetaliationEffect,
    SearchDeckEffect, StatKind, StatModificationEffect, SummonTokenEffect, SwapEffect, SwapKind,
    TargetingSource, TemporaryHpEffect,
};
