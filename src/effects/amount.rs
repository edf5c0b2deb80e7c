//! Effect amounts.
//!
//! Damage and healing accept either a fixed number, a symbolic keyword
//! (`"attack-value"`, `"full"`), or a computed formula authored as
//! `{"formula": "<tag>"}`. Computed values are a first-class variant so
//! every renderer match stays exhaustive.

use serde::{Deserialize, Serialize};

/// A value computed at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formula {
    CountersOnTarget,
    AlliesOnField,
    DamageDealt,
    MissingHealth,
    CardsInHand,
}

impl Formula {
    /// Noun phrase used after "equal to".
    pub const fn phrase(self) -> &'static str {
        match self {
            Formula::CountersOnTarget => "the number of counters on it",
            Formula::AlliesOnField => "the number of allies",
            Formula::DamageDealt => "the damage dealt",
            Formula::MissingHealth => "its missing HP",
            Formula::CardsInHand => "the number of cards in your hand",
        }
    }
}

/// Wire form shared by every amount type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountRepr {
    Number(u32),
    Keyword(String),
    Computed { formula: Formula },
}

/// How much damage an effect deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountRepr", into = "AmountRepr")]
pub enum DamageAmount {
    Fixed(u32),
    /// Equal to the source's current ATK.
    AttackValue,
    Computed(Formula),
}

impl From<u32> for DamageAmount {
    fn from(v: u32) -> Self {
        DamageAmount::Fixed(v)
    }
}

impl TryFrom<AmountRepr> for DamageAmount {
    type Error = String;

    fn try_from(repr: AmountRepr) -> Result<Self, Self::Error> {
        match repr {
            AmountRepr::Number(n) => Ok(DamageAmount::Fixed(n)),
            AmountRepr::Keyword(word) if word == "attack-value" => Ok(DamageAmount::AttackValue),
            AmountRepr::Keyword(word) => Err(format!("unknown damage amount `{word}`")),
            AmountRepr::Computed { formula } => Ok(DamageAmount::Computed(formula)),
        }
    }
}

impl From<DamageAmount> for AmountRepr {
    fn from(amount: DamageAmount) -> Self {
        match amount {
            DamageAmount::Fixed(n) => AmountRepr::Number(n),
            DamageAmount::AttackValue => AmountRepr::Keyword("attack-value".to_string()),
            DamageAmount::Computed(formula) => AmountRepr::Computed { formula },
        }
    }
}

/// How much an effect heals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountRepr", into = "AmountRepr")]
pub enum HealAmount {
    Fixed(u32),
    /// Restore to maximum HP.
    Full,
    Computed(Formula),
}

impl From<u32> for HealAmount {
    fn from(v: u32) -> Self {
        HealAmount::Fixed(v)
    }
}

impl TryFrom<AmountRepr> for HealAmount {
    type Error = String;

    fn try_from(repr: AmountRepr) -> Result<Self, Self::Error> {
        match repr {
            AmountRepr::Number(n) => Ok(HealAmount::Fixed(n)),
            AmountRepr::Keyword(word) if word == "full" => Ok(HealAmount::Full),
            AmountRepr::Keyword(word) => Err(format!("unknown heal amount `{word}`")),
            AmountRepr::Computed { formula } => Ok(HealAmount::Computed(formula)),
        }
    }
}

impl From<HealAmount> for AmountRepr {
    fn from(amount: HealAmount) -> Self {
        match amount {
            HealAmount::Fixed(n) => AmountRepr::Number(n),
            HealAmount::Full => AmountRepr::Keyword("full".to_string()),
            HealAmount::Computed(formula) => AmountRepr::Computed { formula },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_amount_wire_forms() {
        let fixed: DamageAmount = serde_json::from_str("3").unwrap();
        assert_eq!(fixed, DamageAmount::Fixed(3));

        let atk: DamageAmount = serde_json::from_str("\"attack-value\"").unwrap();
        assert_eq!(atk, DamageAmount::AttackValue);

        let computed: DamageAmount =
            serde_json::from_str(r#"{"formula":"allies-on-field"}"#).unwrap();
        assert_eq!(computed, DamageAmount::Computed(Formula::AlliesOnField));

        assert!(serde_json::from_str::<DamageAmount>("\"full\"").is_err());
    }

    #[test]
    fn test_heal_amount_wire_forms() {
        let full: HealAmount = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(full, HealAmount::Full);
        assert_eq!(serde_json::to_string(&HealAmount::Full).unwrap(), "\"full\"");
        assert_eq!(serde_json::to_string(&HealAmount::Fixed(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&HealAmount::Computed(Formula::DamageDealt)).unwrap(),
            r#"{"formula":"damage-dealt"}"#
        );

        assert!(serde_json::from_str::<HealAmount>("\"attack-value\"").is_err());
    }
}
