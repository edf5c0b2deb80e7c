//! Symbolic target scopes.
//!
//! A target never resolves to board entities here. It only names the
//! scope an effect applies to; a battle engine resolves it elsewhere.

use serde::{Deserialize, Serialize};

/// The scope an effect applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityTarget {
    /// The Beast that owns the ability.
    #[serde(rename = "self")]
    SelfUnit,
    /// The ability's chosen target.
    Target,
    TargetAlly,
    TargetEnemy,
    Attacker,
    AllAllies,
    AllEnemies,
    AdjacentAllies,
    AdjacentEnemies,
    OtherAllies,
    RandomAlly,
    RandomEnemy,
    AllUnits,
    PlayerGardener,
    OpponentGardener,
    #[serde(untagged)]
    Unknown(String),
}

impl AbilityTarget {
    /// Raw tag as authored.
    pub fn as_str(&self) -> &str {
        match self {
            AbilityTarget::SelfUnit => "self",
            AbilityTarget::Target => "target",
            AbilityTarget::TargetAlly => "target-ally",
            AbilityTarget::TargetEnemy => "target-enemy",
            AbilityTarget::Attacker => "attacker",
            AbilityTarget::AllAllies => "all-allies",
            AbilityTarget::AllEnemies => "all-enemies",
            AbilityTarget::AdjacentAllies => "adjacent-allies",
            AbilityTarget::AdjacentEnemies => "adjacent-enemies",
            AbilityTarget::OtherAllies => "other-allies",
            AbilityTarget::RandomAlly => "random-ally",
            AbilityTarget::RandomEnemy => "random-enemy",
            AbilityTarget::AllUnits => "all-units",
            AbilityTarget::PlayerGardener => "player-gardener",
            AbilityTarget::OpponentGardener => "opponent-gardener",
            AbilityTarget::Unknown(tag) => tag,
        }
    }

    /// Whether the target is the owning Beast itself.
    pub fn is_self(&self) -> bool {
        matches!(self, AbilityTarget::SelfUnit)
    }

    /// Whether the scope names one Beast or gardener, taking a singular verb.
    ///
    /// `player-gardener` renders as "you" and takes a plural verb.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            AbilityTarget::SelfUnit
                | AbilityTarget::Target
                | AbilityTarget::TargetAlly
                | AbilityTarget::TargetEnemy
                | AbilityTarget::Attacker
                | AbilityTarget::RandomAlly
                | AbilityTarget::RandomEnemy
                | AbilityTarget::OpponentGardener
        )
    }

    /// Whether the target is the opposing gardener.
    pub fn is_opponent(&self) -> bool {
        matches!(self, AbilityTarget::OpponentGardener)
    }
}
