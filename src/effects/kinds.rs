//! Per-kind effect payloads.
//!
//! Each effect kind has its own struct carrying the shared base fields
//! (`target`, `duration`, `condition`) plus whatever the kind needs. Kinds
//! whose consequence is meaningless without a lifetime (stat changes,
//! immunities, damage reduction) make `duration` a required field.
//!
//! Every struct denies unknown fields, so authored data that mixes fields
//! from two kinds is rejected when it is loaded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::vocabulary::{
    AbilityCondition, AbilityTarget, Affinity, CardKind, CounterKind, EffectDuration, Resource,
};

use super::amount::{DamageAmount, HealAmount};

/// Base shape for kinds with no fields of their own
/// (destroy, return-to-hand, copy-ability, nullify, remove-summoning-sickness).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseEffect {
    pub target: AbilityTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// Which stat a stat modification touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Attack,
    Health,
    Both,
}

impl StatKind {
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Attack => "ATK",
            StatKind::Health => "HP",
            StatKind::Both => "ATK/HP",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatModificationEffect {
    pub target: AbilityTarget,
    pub stat: StatKind,
    /// Signed delta.
    pub value: i32,
    pub duration: EffectDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DamageEffect {
    pub target: AbilityTarget,
    pub value: DamageAmount,
    /// Ignores damage reduction and shields.
    #[serde(default, skip_serializing_if = "is_false")]
    pub piercing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealEffect {
    pub target: AbilityTarget,
    pub value: HealAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawCardsEffect {
    /// The gardener who draws.
    pub target: AbilityTarget,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplyCounterEffect {
    pub target: AbilityTarget,
    pub counter: CounterKind,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// Removes counters. No `counter` means every kind; no `value` means all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveCounterEffect {
    pub target: AbilityTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter: Option<CounterKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// Something a Beast can be immune to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImmunitySource {
    Damage,
    Spells,
    Traps,
    Counters,
    Abilities,
    Destroy,
    AttackModifications,
}

impl ImmunitySource {
    pub const fn phrase(self) -> &'static str {
        match self {
            ImmunitySource::Damage => "damage",
            ImmunitySource::Spells => "spells",
            ImmunitySource::Traps => "traps",
            ImmunitySource::Counters => "counters",
            ImmunitySource::Abilities => "abilities",
            ImmunitySource::Destroy => "destruction",
            ImmunitySource::AttackModifications => "attack modifications",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImmunityEffect {
    pub target: AbilityTarget,
    pub immune_to: SmallVec<[ImmunitySource; 4]>,
    pub duration: EffectDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// A source that may be barred from targeting a Beast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetingSource {
    Spells,
    Traps,
    Abilities,
    Enemies,
    EnemyAbilities,
}

impl TargetingSource {
    pub const fn phrase(self) -> &'static str {
        match self {
            TargetingSource::Spells => "spells",
            TargetingSource::Traps => "traps",
            TargetingSource::Abilities => "abilities",
            TargetingSource::Enemies => "enemies",
            TargetingSource::EnemyAbilities => "enemy abilities",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CannotBeTargetedEffect {
    pub target: AbilityTarget,
    pub by: SmallVec<[TargetingSource; 4]>,
    /// Only sources at or above this Cost are barred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// A change to how a Beast attacks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttackModifier {
    DoubleDamage,
    TripleDamage,
    InstantDestroy,
    AttackTwice,
    AttackFirst,
    CannotCounterattack,
    Piercing,
    CannotAttack,
    AttackAllEnemies,
    Lifesteal,
    #[serde(untagged)]
    Unknown(String),
}

impl AttackModifier {
    pub fn as_str(&self) -> &str {
        match self {
            AttackModifier::DoubleDamage => "double-damage",
            AttackModifier::TripleDamage => "triple-damage",
            AttackModifier::InstantDestroy => "instant-destroy",
            AttackModifier::AttackTwice => "attack-twice",
            AttackModifier::AttackFirst => "attack-first",
            AttackModifier::CannotCounterattack => "cannot-counterattack",
            AttackModifier::Piercing => "piercing",
            AttackModifier::CannotAttack => "cannot-attack",
            AttackModifier::AttackAllEnemies => "attack-all-enemies",
            AttackModifier::Lifesteal => "lifesteal",
            AttackModifier::Unknown(tag) => tag,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttackModificationEffect {
    pub target: AbilityTarget,
    pub modification: AttackModifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// Where a moved Beast ends up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveDestination {
    #[default]
    Adjacent,
    Empty,
    Front,
    Back,
}

impl MoveDestination {
    pub const fn phrase(self) -> &'static str {
        match self {
            MoveDestination::Adjacent => "an adjacent space",
            MoveDestination::Empty => "an empty space",
            MoveDestination::Front => "the front row",
            MoveDestination::Back => "the back row",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveEffect {
    pub target: AbilityTarget,
    #[serde(default)]
    pub to: MoveDestination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GainResourceEffect {
    /// The gardener who gains.
    pub target: AbilityTarget,
    #[serde(default)]
    pub resource: Resource,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// Prevents damage. No `value` means all damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreventDamageEffect {
    pub target: AbilityTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchDeckEffect {
    pub target: AbilityTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_kind: Option<CardKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemporaryHpEffect {
    pub target: AbilityTarget,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DamageReductionEffect {
    pub target: AbilityTarget,
    pub value: u32,
    pub duration: EffectDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

/// Damage dealt back to whoever attacked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetaliationEffect {
    pub target: AbilityTarget,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwapKind {
    /// Swap a Beast's ATK and HP.
    Stats,
    /// Swap board positions with the target.
    Positions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwapEffect {
    pub target: AbilityTarget,
    pub swap: SwapKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscardEffect {
    /// The gardener who discards.
    pub target: AbilityTarget,
    pub value: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub random: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectDamageEffect {
    /// Whose incoming damage is redirected.
    pub target: AbilityTarget,
    /// Where it goes instead.
    pub to: AbilityTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummonTokenEffect {
    pub target: AbilityTarget,
    /// Display name of the token card.
    pub token: String,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<AbilityCondition>,
}
