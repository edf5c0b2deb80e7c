//! Effect durations.

use serde::{Deserialize, Serialize};

/// How long an effect's consequence persists.
///
/// An effect with no duration is one-shot (`Instant`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectDuration {
    Permanent,
    EndOfTurn,
    StartOfNextTurn,
    #[default]
    Instant,
    /// Ambient while the source remains on the field.
    WhileOnField,
    NextAttack,
    ThisTurn,
}

impl EffectDuration {
    pub const fn as_str(self) -> &'static str {
        match self {
            EffectDuration::Permanent => "permanent",
            EffectDuration::EndOfTurn => "end-of-turn",
            EffectDuration::StartOfNextTurn => "start-of-next-turn",
            EffectDuration::Instant => "instant",
            EffectDuration::WhileOnField => "while-on-field",
            EffectDuration::NextAttack => "next-attack",
            EffectDuration::ThisTurn => "this-turn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_instant() {
        assert_eq!(EffectDuration::default(), EffectDuration::Instant);
    }

    #[test]
    fn test_duration_tags() {
        let parsed: EffectDuration = serde_json::from_str("\"while-on-field\"").unwrap();
        assert_eq!(parsed, EffectDuration::WhileOnField);
        assert_eq!(
            serde_json::to_string(&EffectDuration::StartOfNextTurn).unwrap(),
            "\"start-of-next-turn\""
        );
    }
}
