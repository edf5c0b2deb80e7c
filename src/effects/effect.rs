//! The effect union.
//!
//! `AbilityEffect` is a closed tagged union keyed on `"type"`. Adding a
//! kind means adding a variant here and an `EffectType` member, and the
//! compiler then points at every match that has to learn about it.

use serde::{Deserialize, Serialize};

use crate::vocabulary::{AbilityCondition, AbilityTarget, CounterKind, EffectDuration};

use super::amount::{DamageAmount, HealAmount};
use super::kinds::*;

/// Discriminant of an [`AbilityEffect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectType {
    ModifyStats,
    DealDamage,
    Heal,
    DrawCards,
    ApplyCounter,
    RemoveCounter,
    Immunity,
    CannotBeTargeted,
    AttackModification,
    Move,
    GainResource,
    PreventDamage,
    SearchDeck,
    Destroy,
    TemporaryHp,
    DamageReduction,
    Retaliation,
    Swap,
    ReturnToHand,
    Discard,
    CopyAbility,
    Nullify,
    RedirectDamage,
    RemoveSummoningSickness,
    SummonToken,
}

impl EffectType {
    /// Every effect type, in declaration order.
    pub const ALL: [EffectType; 25] = [
        EffectType::ModifyStats,
        EffectType::DealDamage,
        EffectType::Heal,
        EffectType::DrawCards,
        EffectType::ApplyCounter,
        EffectType::RemoveCounter,
        EffectType::Immunity,
        EffectType::CannotBeTargeted,
        EffectType::AttackModification,
        EffectType::Move,
        EffectType::GainResource,
        EffectType::PreventDamage,
        EffectType::SearchDeck,
        EffectType::Destroy,
        EffectType::TemporaryHp,
        EffectType::DamageReduction,
        EffectType::Retaliation,
        EffectType::Swap,
        EffectType::ReturnToHand,
        EffectType::Discard,
        EffectType::CopyAbility,
        EffectType::Nullify,
        EffectType::RedirectDamage,
        EffectType::RemoveSummoningSickness,
        EffectType::SummonToken,
    ];

    /// Tag as authored in ability data.
    pub const fn as_str(self) -> &'static str {
        match self {
            EffectType::ModifyStats => "modify-stats",
            EffectType::DealDamage => "deal-damage",
            EffectType::Heal => "heal",
            EffectType::DrawCards => "draw-cards",
            EffectType::ApplyCounter => "apply-counter",
            EffectType::RemoveCounter => "remove-counter",
            EffectType::Immunity => "immunity",
            EffectType::CannotBeTargeted => "cannot-be-targeted",
            EffectType::AttackModification => "attack-modification",
            EffectType::Move => "move",
            EffectType::GainResource => "gain-resource",
            EffectType::PreventDamage => "prevent-damage",
            EffectType::SearchDeck => "search-deck",
            EffectType::Destroy => "destroy",
            EffectType::TemporaryHp => "temporary-hp",
            EffectType::DamageReduction => "damage-reduction",
            EffectType::Retaliation => "retaliation",
            EffectType::Swap => "swap",
            EffectType::ReturnToHand => "return-to-hand",
            EffectType::Discard => "discard",
            EffectType::CopyAbility => "copy-ability",
            EffectType::Nullify => "nullify",
            EffectType::RedirectDamage => "redirect-damage",
            EffectType::RemoveSummoningSickness => "remove-summoning-sickness",
            EffectType::SummonToken => "summon-token",
        }
    }

    /// Whether effects of this type must carry a duration.
    pub const fn requires_duration(self) -> bool {
        matches!(
            self,
            EffectType::ModifyStats | EffectType::Immunity | EffectType::DamageReduction
        )
    }
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic declarative consequence of an ability.
///
/// ## Stats and combat
/// `ModifyStats`, `DealDamage`, `Heal`, `TemporaryHp`, `DamageReduction`,
/// `PreventDamage`, `Retaliation`, `RedirectDamage`, `AttackModification`
///
/// ## Counters
/// `ApplyCounter`, `RemoveCounter`
///
/// ## Protection
/// `Immunity`, `CannotBeTargeted`, `Nullify`
///
/// ## Board and cards
/// `Move`, `Swap`, `Destroy`, `ReturnToHand`, `SummonToken`,
/// `RemoveSummoningSickness`, `CopyAbility`, `DrawCards`, `Discard`,
/// `SearchDeck`, `GainResource`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AbilityEffect {
    ModifyStats(StatModificationEffect),
    DealDamage(DamageEffect),
    Heal(HealEffect),
    DrawCards(DrawCardsEffect),
    ApplyCounter(ApplyCounterEffect),
    RemoveCounter(RemoveCounterEffect),
    Immunity(ImmunityEffect),
    CannotBeTargeted(CannotBeTargetedEffect),
    AttackModification(AttackModificationEffect),
    Move(MoveEffect),
    GainResource(GainResourceEffect),
    PreventDamage(PreventDamageEffect),
    SearchDeck(SearchDeckEffect),
    Destroy(BaseEffect),
    TemporaryHp(TemporaryHpEffect),
    DamageReduction(DamageReductionEffect),
    Retaliation(RetaliationEffect),
    Swap(SwapEffect),
    ReturnToHand(BaseEffect),
    Discard(DiscardEffect),
    CopyAbility(BaseEffect),
    Nullify(BaseEffect),
    RedirectDamage(RedirectDamageEffect),
    RemoveSummoningSickness(BaseEffect),
    SummonToken(SummonTokenEffect),
}

/// Runs `$body` with `$e` bound to the payload of whichever variant
/// `$value` holds. Only usable for expressions that typecheck for every
/// payload (the base fields).
macro_rules! on_payload {
    ($value:expr, $e:ident => $body:expr) => {
        match $value {
            AbilityEffect::ModifyStats($e) => $body,
            AbilityEffect::DealDamage($e) => $body,
            AbilityEffect::Heal($e) => $body,
            AbilityEffect::DrawCards($e) => $body,
            AbilityEffect::ApplyCounter($e) => $body,
            AbilityEffect::RemoveCounter($e) => $body,
            AbilityEffect::Immunity($e) => $body,
            AbilityEffect::CannotBeTargeted($e) => $body,
            AbilityEffect::AttackModification($e) => $body,
            AbilityEffect::Move($e) => $body,
            AbilityEffect::GainResource($e) => $body,
            AbilityEffect::PreventDamage($e) => $body,
            AbilityEffect::SearchDeck($e) => $body,
            AbilityEffect::Destroy($e) => $body,
            AbilityEffect::TemporaryHp($e) => $body,
            AbilityEffect::DamageReduction($e) => $body,
            AbilityEffect::Retaliation($e) => $body,
            AbilityEffect::Swap($e) => $body,
            AbilityEffect::ReturnToHand($e) => $body,
            AbilityEffect::Discard($e) => $body,
            AbilityEffect::CopyAbility($e) => $body,
            AbilityEffect::Nullify($e) => $body,
            AbilityEffect::RedirectDamage($e) => $body,
            AbilityEffect::RemoveSummoningSickness($e) => $body,
            AbilityEffect::SummonToken($e) => $body,
        }
    };
}

/// Uniform access to required and optional duration fields.
trait DurationSlot {
    fn get(&self) -> Option<EffectDuration>;
    fn set(&mut self, duration: EffectDuration);
}

impl DurationSlot for EffectDuration {
    fn get(&self) -> Option<EffectDuration> {
        Some(*self)
    }

    fn set(&mut self, duration: EffectDuration) {
        *self = duration;
    }
}

impl DurationSlot for Option<EffectDuration> {
    fn get(&self) -> Option<EffectDuration> {
        *self
    }

    fn set(&mut self, duration: EffectDuration) {
        *self = Some(duration);
    }
}

impl AbilityEffect {
    /// The discriminant of this effect.
    pub const fn effect_type(&self) -> EffectType {
        match self {
            AbilityEffect::ModifyStats(_) => EffectType::ModifyStats,
            AbilityEffect::DealDamage(_) => EffectType::DealDamage,
            AbilityEffect::Heal(_) => EffectType::Heal,
            AbilityEffect::DrawCards(_) => EffectType::DrawCards,
            AbilityEffect::ApplyCounter(_) => EffectType::ApplyCounter,
            AbilityEffect::RemoveCounter(_) => EffectType::RemoveCounter,
            AbilityEffect::Immunity(_) => EffectType::Immunity,
            AbilityEffect::CannotBeTargeted(_) => EffectType::CannotBeTargeted,
            AbilityEffect::AttackModification(_) => EffectType::AttackModification,
            AbilityEffect::Move(_) => EffectType::Move,
            AbilityEffect::GainResource(_) => EffectType::GainResource,
            AbilityEffect::PreventDamage(_) => EffectType::PreventDamage,
            AbilityEffect::SearchDeck(_) => EffectType::SearchDeck,
            AbilityEffect::Destroy(_) => EffectType::Destroy,
            AbilityEffect::TemporaryHp(_) => EffectType::TemporaryHp,
            AbilityEffect::DamageReduction(_) => EffectType::DamageReduction,
            AbilityEffect::Retaliation(_) => EffectType::Retaliation,
            AbilityEffect::Swap(_) => EffectType::Swap,
            AbilityEffect::ReturnToHand(_) => EffectType::ReturnToHand,
            AbilityEffect::Discard(_) => EffectType::Discard,
            AbilityEffect::CopyAbility(_) => EffectType::CopyAbility,
            AbilityEffect::Nullify(_) => EffectType::Nullify,
            AbilityEffect::RedirectDamage(_) => EffectType::RedirectDamage,
            AbilityEffect::RemoveSummoningSickness(_) => EffectType::RemoveSummoningSickness,
            AbilityEffect::SummonToken(_) => EffectType::SummonToken,
        }
    }

    pub fn target(&self) -> &AbilityTarget {
        on_payload!(self, e => &e.target)
    }

    /// The declared duration; `None` means one-shot.
    pub fn duration(&self) -> Option<EffectDuration> {
        on_payload!(self, e => e.duration.get())
    }

    pub fn condition(&self) -> Option<&AbilityCondition> {
        on_payload!(self, e => e.condition.as_ref())
    }

    /// Retarget the effect (builder pattern).
    #[must_use]
    pub fn on(mut self, target: AbilityTarget) -> Self {
        on_payload!(&mut self, e => e.target = target);
        self
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub fn lasting(mut self, duration: EffectDuration) -> Self {
        on_payload!(&mut self, e => e.duration.set(duration));
        self
    }

    /// Gate the effect on a condition (builder pattern).
    #[must_use]
    pub fn when(mut self, condition: AbilityCondition) -> Self {
        on_payload!(&mut self, e => e.condition = Some(condition));
        self
    }

    // === Constructors ===

    /// Create a stat modification lasting while the source is on the field.
    pub fn modify_stats(target: AbilityTarget, stat: StatKind, value: i32) -> Self {
        Self::ModifyStats(StatModificationEffect {
            target,
            stat,
            value,
            duration: EffectDuration::WhileOnField,
            condition: None,
        })
    }

    /// Create a damage effect.
    pub fn damage(target: AbilityTarget, value: impl Into<DamageAmount>) -> Self {
        Self::DealDamage(DamageEffect {
            target,
            value: value.into(),
            piercing: false,
            duration: None,
            condition: None,
        })
    }

    /// Create a piercing damage effect.
    pub fn piercing_damage(target: AbilityTarget, value: impl Into<DamageAmount>) -> Self {
        Self::DealDamage(DamageEffect {
            target,
            value: value.into(),
            piercing: true,
            duration: None,
            condition: None,
        })
    }

    /// Create a heal effect.
    pub fn heal(target: AbilityTarget, value: impl Into<HealAmount>) -> Self {
        Self::Heal(HealEffect {
            target,
            value: value.into(),
            duration: None,
            condition: None,
        })
    }

    /// Create a draw effect for the acting gardener.
    pub fn draw(count: u32) -> Self {
        Self::DrawCards(DrawCardsEffect {
            target: AbilityTarget::PlayerGardener,
            value: count,
            duration: None,
            condition: None,
        })
    }

    pub fn apply_counter(target: AbilityTarget, counter: CounterKind, count: u32) -> Self {
        Self::ApplyCounter(ApplyCounterEffect {
            target,
            counter,
            value: count,
            duration: None,
            condition: None,
        })
    }

    /// Remove every counter of every kind.
    pub fn clear_counters(target: AbilityTarget) -> Self {
        Self::RemoveCounter(RemoveCounterEffect {
            target,
            counter: None,
            value: None,
            duration: None,
            condition: None,
        })
    }

    pub fn remove_counters(target: AbilityTarget, counter: CounterKind, count: u32) -> Self {
        Self::RemoveCounter(RemoveCounterEffect {
            target,
            counter: Some(counter),
            value: Some(count),
            duration: None,
            condition: None,
        })
    }

    pub fn immunity(
        target: AbilityTarget,
        immune_to: impl IntoIterator<Item = ImmunitySource>,
        duration: EffectDuration,
    ) -> Self {
        Self::Immunity(ImmunityEffect {
            target,
            immune_to: immune_to.into_iter().collect(),
            duration,
            condition: None,
        })
    }

    pub fn cannot_be_targeted(
        target: AbilityTarget,
        by: impl IntoIterator<Item = TargetingSource>,
    ) -> Self {
        Self::CannotBeTargeted(CannotBeTargetedEffect {
            target,
            by: by.into_iter().collect(),
            cost_threshold: None,
            duration: None,
            condition: None,
        })
    }

    pub fn attack_modification(target: AbilityTarget, modification: AttackModifier) -> Self {
        Self::AttackModification(AttackModificationEffect {
            target,
            modification,
            duration: None,
            condition: None,
        })
    }

    pub fn destroy(target: AbilityTarget) -> Self {
        Self::Destroy(Self::base(target))
    }

    pub fn retaliation(target: AbilityTarget, value: u32) -> Self {
        Self::Retaliation(RetaliationEffect {
            target,
            value,
            duration: None,
            condition: None,
        })
    }

    pub fn damage_reduction(target: AbilityTarget, value: u32, duration: EffectDuration) -> Self {
        Self::DamageReduction(DamageReductionEffect {
            target,
            value,
            duration,
            condition: None,
        })
    }

    pub fn gain_nectar(value: u32) -> Self {
        Self::GainResource(GainResourceEffect {
            target: AbilityTarget::PlayerGardener,
            resource: crate::vocabulary::Resource::Nectar,
            value,
            duration: None,
            condition: None,
        })
    }

    pub fn remove_summoning_sickness(target: AbilityTarget) -> Self {
        Self::RemoveSummoningSickness(Self::base(target))
    }

    fn base(target: AbilityTarget) -> BaseEffect {
        BaseEffect {
            target,
            duration: None,
            condition: None,
        }
    }
}
