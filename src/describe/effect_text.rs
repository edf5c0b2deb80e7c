//! Effect rendering: one clause per effect.
//!
//! `clause` has one arm per effect kind and never fails; the duration and
//! condition fragments are appended uniformly afterwards.

use log::debug;
use smallvec::SmallVec;

use crate::effects::{
    AbilityEffect, AttackModifier, DamageAmount, HealAmount, SearchDeckEffect, SwapKind,
};
use crate::vocabulary::AbilityTarget;

use super::combine::{count_noun, join_conjunctive, join_disjunctive, normalize_whitespace};
use super::resolvers::{condition_text, duration_text, target_text};

/// Render one effect as a clause, e.g. `"deal 2 damage to all enemies"`.
pub fn effect_text(effect: &AbilityEffect) -> String {
    render_effect(effect, true)
}

pub(crate) fn render_effect(effect: &AbilityEffect, with_condition: bool) -> String {
    let mut text = clause(effect);
    append(&mut text, duration_text(effect.duration()));
    if with_condition {
        append(&mut text, &condition_text(effect.condition()));
    }
    // Empty raw tags leave stray spaces behind.
    normalize_whitespace(&text)
}

fn append(text: &mut String, fragment: &str) {
    if !fragment.is_empty() {
        text.push(' ');
        text.push_str(fragment);
    }
}

/// Pick the verb form agreeing with the target's number.
fn agree<'a>(target: &AbilityTarget, singular: &'a str, plural: &'a str) -> &'a str {
    if target.is_singular() {
        singular
    } else {
        plural
    }
}

fn clause(effect: &AbilityEffect) -> String {
    match effect {
        AbilityEffect::ModifyStats(e) => {
            // Only "this" takes the singular verb here.
            let verb = if e.target.is_self() { "gets" } else { "get" };
            let sign = if e.value < 0 { '-' } else { '+' };
            format!(
                "{} {verb} {sign}{} {}",
                target_text(&e.target),
                e.value.unsigned_abs(),
                e.stat.label()
            )
        }
        AbilityEffect::DealDamage(e) => {
            let t = target_text(&e.target);
            let kind = if e.piercing { "piercing " } else { "" };
            match e.value {
                DamageAmount::Fixed(n) => format!("deal {n} {kind}damage to {t}"),
                DamageAmount::AttackValue => format!("deal {kind}damage equal to ATK to {t}"),
                DamageAmount::Computed(formula) => {
                    format!("deal {kind}damage equal to {} to {t}", formula.phrase())
                }
            }
        }
        AbilityEffect::Heal(e) => {
            let t = target_text(&e.target);
            match e.value {
                HealAmount::Full => format!("fully heal {t}"),
                HealAmount::Fixed(n) => format!("heal {t} by {n} HP"),
                HealAmount::Computed(formula) => {
                    format!("heal {t} by HP equal to {}", formula.phrase())
                }
            }
        }
        AbilityEffect::DrawCards(e) => {
            let cards = count_noun(e.value, "card", "cards");
            if e.target.is_opponent() {
                format!("opponent draws {cards}")
            } else {
                format!("draw {cards}")
            }
        }
        AbilityEffect::ApplyCounter(e) => {
            let noun = if e.value > 1 { "counters" } else { "counter" };
            format!(
                "put {} {} {noun} on {}",
                e.value,
                e.counter,
                target_text(&e.target)
            )
        }
        AbilityEffect::RemoveCounter(e) => {
            let t = target_text(&e.target);
            match (&e.counter, e.value) {
                (None, None) => format!("remove all counters from {t}"),
                (None, Some(n)) => {
                    format!("remove {} from {t}", count_noun(n, "counter", "counters"))
                }
                (Some(counter), None) => format!("remove all {counter} counters from {t}"),
                (Some(counter), Some(n)) => {
                    let noun = if n == 1 { "counter" } else { "counters" };
                    format!("remove {n} {counter} {noun} from {t}")
                }
            }
        }
        AbilityEffect::Immunity(e) => {
            let subject = format!(
                "{} {} immune",
                target_text(&e.target),
                agree(&e.target, "is", "are")
            );
            let sources: SmallVec<[&str; 4]> = e.immune_to.iter().map(|s| s.phrase()).collect();
            if sources.is_empty() {
                subject
            } else {
                format!("{subject} to {}", join_conjunctive(sources.as_slice()))
            }
        }
        AbilityEffect::CannotBeTargeted(e) => {
            let mut text = format!("{} can't be targeted", target_text(&e.target));
            let sources: SmallVec<[&str; 4]> = e.by.iter().map(|s| s.phrase()).collect();
            if !sources.is_empty() {
                text.push_str(" by ");
                text.push_str(&join_disjunctive(sources.as_slice()));
            }
            if let Some(cost) = e.cost_threshold {
                text.push_str(&format!(" with Cost {cost} or higher"));
            }
            text
        }
        AbilityEffect::AttackModification(e) => format!(
            "{} {}",
            target_text(&e.target),
            modifier_phrase(&e.modification, e.target.is_singular())
        ),
        AbilityEffect::Move(e) => {
            format!("move {} to {}", target_text(&e.target), e.to.phrase())
        }
        AbilityEffect::GainResource(e) => {
            let resource = e.resource.name();
            if e.target.is_opponent() {
                format!("opponent gains {} {resource}", e.value)
            } else {
                format!("gain {} {resource}", e.value)
            }
        }
        AbilityEffect::PreventDamage(e) => {
            let t = target_text(&e.target);
            match e.value {
                Some(n) => format!("prevent {n} damage to {t}"),
                None => format!("prevent all damage to {t}"),
            }
        }
        AbilityEffect::SearchDeck(e) => format!("search your deck for {}", search_subject(e)),
        AbilityEffect::Destroy(e) => format!("destroy {}", target_text(&e.target)),
        AbilityEffect::TemporaryHp(e) => {
            format!("give {} {} temporary HP", target_text(&e.target), e.value)
        }
        AbilityEffect::DamageReduction(e) => format!(
            "{} {} {} less damage",
            target_text(&e.target),
            agree(&e.target, "takes", "take"),
            e.value
        ),
        AbilityEffect::Retaliation(e) => {
            format!("deal {} damage to {}", e.value, target_text(&e.target))
        }
        AbilityEffect::Swap(e) => match e.swap {
            SwapKind::Stats => format!("swap ATK and HP of {}", target_text(&e.target)),
            SwapKind::Positions => format!("swap positions with {}", target_text(&e.target)),
        },
        AbilityEffect::ReturnToHand(e) => format!("return {} to hand", target_text(&e.target)),
        AbilityEffect::Discard(e) => {
            let cards = count_noun(e.value, "card", "cards");
            let random = if e.random { " at random" } else { "" };
            if e.target.is_opponent() {
                format!("opponent discards {cards}{random}")
            } else {
                format!("discard {cards}{random}")
            }
        }
        AbilityEffect::CopyAbility(e) => {
            format!("copy an ability from {}", target_text(&e.target))
        }
        AbilityEffect::Nullify(e) => {
            format!("nullify the abilities of {}", target_text(&e.target))
        }
        AbilityEffect::RedirectDamage(e) => format!(
            "redirect damage dealt to {} to {}",
            target_text(&e.target),
            target_text(&e.to)
        ),
        AbilityEffect::RemoveSummoningSickness(e) => {
            format!("{} can attack immediately", target_text(&e.target))
        }
        AbilityEffect::SummonToken(e) => {
            let noun = if e.value == 1 { "token" } else { "tokens" };
            format!("summon {} {} {noun}", e.value, e.token)
        }
    }
}

/// Fixed phrase for an attack modifier; unknown tags echo the raw tag.
fn modifier_phrase(modifier: &AttackModifier, singular: bool) -> &str {
    let (one, many) = match modifier {
        AttackModifier::DoubleDamage => ("deals double damage", "deal double damage"),
        AttackModifier::TripleDamage => ("deals triple damage", "deal triple damage"),
        AttackModifier::InstantDestroy => {
            ("destroys any Beast it damages", "destroy any Beast they damage")
        }
        AttackModifier::AttackTwice => ("can attack twice", "can attack twice"),
        AttackModifier::AttackFirst => ("attacks first", "attack first"),
        AttackModifier::CannotCounterattack => {
            ("can't be counterattacked", "can't be counterattacked")
        }
        AttackModifier::Piercing => ("has piercing", "have piercing"),
        AttackModifier::CannotAttack => ("can't attack", "can't attack"),
        AttackModifier::AttackAllEnemies => ("attacks all enemies", "attack all enemies"),
        AttackModifier::Lifesteal => ("heals for damage it deals", "heal for damage they deal"),
        AttackModifier::Unknown(tag) => {
            debug!("no phrase for attack modifier `{tag}`, using raw tag");
            return tag;
        }
    };
    if singular {
        one
    } else {
        many
    }
}

/// `"a Fire Beast"`, `"an Air spell"`, `"2 cards"`.
fn search_subject(e: &SearchDeckEffect) -> String {
    let count = e.value.unwrap_or(1);
    let (singular, plural) = e
        .card_kind
        .map_or(("card", "cards"), |kind| (kind.singular(), kind.plural()));
    let affinity = e
        .affinity
        .map(|a| format!("{} ", a.name()))
        .unwrap_or_default();

    if count == 1 {
        let article = if e.affinity.is_some_and(|a| a.takes_an()) {
            "an"
        } else {
            "a"
        };
        format!("{article} {affinity}{singular}")
    } else {
        format!("{count} {affinity}{plural}")
    }
}
