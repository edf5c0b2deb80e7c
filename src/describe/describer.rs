//! Top-level assembly: ability → display string.

use log::trace;
use smallvec::SmallVec;

use crate::abilities::StructuredAbility;

use super::combine::{combine, normalize_whitespace};
use super::config::DescribeConfig;
use super::effect_text::render_effect;
use super::resolvers::{cost_text, trigger_text};

/// Renders abilities under a fixed [`DescribeConfig`].
///
/// Holds no state beyond its configuration and can be shared freely
/// across threads.
///
/// ## Example
///
/// ```
/// use ccg_abilities::abilities::StructuredAbility;
/// use ccg_abilities::describe::{DescribeConfig, Describer};
/// use ccg_abilities::effects::AbilityEffect;
/// use ccg_abilities::vocabulary::{AbilityTarget, AbilityTrigger};
///
/// let ability = StructuredAbility::new("Flame Retaliation")
///     .with_trigger(AbilityTrigger::OnDamage)
///     .with_effect(AbilityEffect::retaliation(AbilityTarget::Attacker, 1));
///
/// let describer = Describer::new(DescribeConfig::default());
/// assert_eq!(describer.describe(&ability), "When attacked, deal 1 damage to attacker");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Describer {
    config: DescribeConfig,
}

impl Describer {
    pub fn new(config: DescribeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DescribeConfig {
        &self.config
    }

    /// Render an ability.
    ///
    /// Parts, in order: trigger prefix, cost prefix, combined effect
    /// clauses, usage-limit suffixes. Empty parts are skipped. If nothing
    /// is produced the ability's name is returned.
    pub fn describe(&self, ability: &StructuredAbility) -> String {
        let mut parts: SmallVec<[String; 5]> = SmallVec::new();

        parts.push(trigger_text(ability.trigger.as_ref()).to_string());
        parts.push(cost_text(ability.cost.as_ref()));

        let clauses: Vec<String> = ability
            .effects
            .iter()
            .map(|effect| render_effect(effect, self.config.conditions))
            .collect();
        parts.push(combine(&clauses));

        if self.config.usage_limits {
            if let Some(uses) = ability.max_uses_per_turn {
                parts.push(format!("({uses}x per turn)"));
            }
            if ability.max_uses_per_game.is_some() {
                parts.push("(once per game)".to_string());
            }
        }

        parts.retain(|part| !part.is_empty());
        let joined = parts.join(" ");
        let mut text = normalize_whitespace(&joined);

        if text.is_empty() {
            text = ability.name.clone();
        } else if self.config.capitalize {
            text = capitalize_first(&text);
        }

        trace!("described `{}` as `{}`", ability.name, text);
        text
    }
}

/// Render an ability with the default configuration.
pub fn describe(ability: &StructuredAbility) -> String {
    Describer::default().describe(ability)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
