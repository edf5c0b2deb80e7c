//! Small tag vocabularies shared by effects, costs and conditions.
//!
//! - `CounterKind`: stackable markers placed on Beasts (Burn, Spore, ...)
//! - `Affinity`: elemental alignment of a card
//! - `CardKind`: broad card categories used by deck searches
//! - `Resource`: gardener resources gained by effects

use serde::{Deserialize, Serialize};

/// A stackable counter placed on a unit.
///
/// Counters authored against a newer vocabulary load as `Unknown` and
/// render with their raw tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterKind {
    Burn,
    Spore,
    Freeze,
    Soot,
    Poison,
    Shield,
    #[serde(untagged)]
    Unknown(String),
}

impl CounterKind {
    /// Display name used in ability text.
    pub fn name(&self) -> &str {
        match self {
            CounterKind::Burn => "Burn",
            CounterKind::Spore => "Spore",
            CounterKind::Freeze => "Freeze",
            CounterKind::Soot => "Soot",
            CounterKind::Poison => "Poison",
            CounterKind::Shield => "Shield",
            CounterKind::Unknown(tag) => tag,
        }
    }
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Elemental affinity of a card.
///
/// Closed on purpose: condition values are resolved by trying affinity
/// before counter, so an open affinity would swallow every counter tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Affinity {
    Fire,
    Water,
    Earth,
    Air,
    Bloom,
}

impl Affinity {
    /// Display name used in ability text.
    pub const fn name(self) -> &'static str {
        match self {
            Affinity::Fire => "Fire",
            Affinity::Water => "Water",
            Affinity::Earth => "Earth",
            Affinity::Air => "Air",
            Affinity::Bloom => "Bloom",
        }
    }

    /// Whether the name starts with a vowel sound ("an Air Beast").
    pub const fn takes_an(self) -> bool {
        matches!(self, Affinity::Earth | Affinity::Air)
    }
}

impl std::fmt::Display for Affinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card category, used to narrow deck searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    Beast,
    Spell,
    Trap,
    Habitat,
}

impl CardKind {
    /// Singular noun.
    pub const fn singular(self) -> &'static str {
        match self {
            CardKind::Beast => "Beast",
            CardKind::Spell => "spell",
            CardKind::Trap => "trap",
            CardKind::Habitat => "Habitat",
        }
    }

    /// Plural noun.
    pub const fn plural(self) -> &'static str {
        match self {
            CardKind::Beast => "Beasts",
            CardKind::Spell => "spells",
            CardKind::Trap => "traps",
            CardKind::Habitat => "Habitats",
        }
    }
}

/// A gardener resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    #[default]
    Nectar,
    MaxNectar,
}

impl Resource {
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Nectar => "nectar",
            Resource::MaxNectar => "max nectar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_names() {
        assert_eq!(CounterKind::Burn.name(), "Burn");
        assert_eq!(CounterKind::Unknown("frost-bite".to_string()).name(), "frost-bite");
        assert_eq!(format!("{}", CounterKind::Spore), "Spore");
    }

    #[test]
    fn test_unknown_counter_deserializes() {
        let known: CounterKind = serde_json::from_str("\"burn\"").unwrap();
        assert_eq!(known, CounterKind::Burn);

        let unknown: CounterKind = serde_json::from_str("\"frost-bite\"").unwrap();
        assert_eq!(unknown, CounterKind::Unknown("frost-bite".to_string()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"frost-bite\"");
    }

    #[test]
    fn test_affinity_article() {
        assert!(Affinity::Air.takes_an());
        assert!(Affinity::Earth.takes_an());
        assert!(!Affinity::Fire.takes_an());
    }

    #[test]
    fn test_affinity_is_closed() {
        assert!(serde_json::from_str::<Affinity>("\"burn\"").is_err());
    }
}
