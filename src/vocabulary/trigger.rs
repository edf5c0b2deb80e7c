//! Ability triggers.
//!
//! A trigger names the game event that fires an ability. `Passive` and
//! `Activated` abilities have no event and render without a prefix.

use serde::{Deserialize, Serialize};

/// The game event that causes an ability's effects to fire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityTrigger {
    /// Always on while the Beast is on the field.
    Passive,
    /// Used by the gardener, usually with a cost.
    Activated,
    OnSummon,
    OnAttack,
    /// This Beast is attacked.
    OnDamage,
    /// This Beast deals damage.
    OnDealDamage,
    OnDeath,
    OnHeal,
    OnTurnStart,
    OnTurnEnd,
    OnAllySummon,
    OnAllyDeath,
    OnEnemySummon,
    OnSpellCast,
    #[serde(untagged)]
    Unknown(String),
}

impl AbilityTrigger {
    /// Raw tag as authored.
    pub fn as_str(&self) -> &str {
        match self {
            AbilityTrigger::Passive => "Passive",
            AbilityTrigger::Activated => "Activated",
            AbilityTrigger::OnSummon => "OnSummon",
            AbilityTrigger::OnAttack => "OnAttack",
            AbilityTrigger::OnDamage => "OnDamage",
            AbilityTrigger::OnDealDamage => "OnDealDamage",
            AbilityTrigger::OnDeath => "OnDeath",
            AbilityTrigger::OnHeal => "OnHeal",
            AbilityTrigger::OnTurnStart => "OnTurnStart",
            AbilityTrigger::OnTurnEnd => "OnTurnEnd",
            AbilityTrigger::OnAllySummon => "OnAllySummon",
            AbilityTrigger::OnAllyDeath => "OnAllyDeath",
            AbilityTrigger::OnEnemySummon => "OnEnemySummon",
            AbilityTrigger::OnSpellCast => "OnSpellCast",
            AbilityTrigger::Unknown(tag) => tag,
        }
    }

    /// Whether the trigger is implicit (no event to verbalize).
    pub fn is_implicit(&self) -> bool {
        matches!(self, AbilityTrigger::Passive | AbilityTrigger::Activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_serialization() {
        let json = serde_json::to_string(&AbilityTrigger::OnSummon).unwrap();
        assert_eq!(json, "\"OnSummon\"");

        let parsed: AbilityTrigger = serde_json::from_str("\"OnDamage\"").unwrap();
        assert_eq!(parsed, AbilityTrigger::OnDamage);
    }

    #[test]
    fn test_unknown_trigger() {
        let parsed: AbilityTrigger = serde_json::from_str("\"OnBloom\"").unwrap();
        assert_eq!(parsed, AbilityTrigger::Unknown("OnBloom".to_string()));
        assert_eq!(parsed.as_str(), "OnBloom");
        assert!(!parsed.is_implicit());
    }

    #[test]
    fn test_implicit_triggers() {
        assert!(AbilityTrigger::Passive.is_implicit());
        assert!(AbilityTrigger::Activated.is_implicit());
        assert!(!AbilityTrigger::OnSummon.is_implicit());
    }
}
