//! Activation costs.

use serde::{Deserialize, Serialize};

use super::tags::CounterKind;

/// A cost paid to use an activated ability.
///
/// `counter` exists only on `RemoveCounter`; the enum makes any other
/// combination unrepresentable. A missing `value` means 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", deny_unknown_fields)]
pub enum AbilityCost {
    Nectar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<u32>,
    },
    Discard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<u32>,
    },
    Sacrifice {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<u32>,
    },
    RemoveCounter {
        counter: CounterKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<u32>,
    },
}

impl AbilityCost {
    pub fn nectar(amount: u32) -> Self {
        Self::Nectar { value: Some(amount) }
    }

    pub fn discard(count: u32) -> Self {
        Self::Discard { value: Some(count) }
    }

    pub fn sacrifice(count: u32) -> Self {
        Self::Sacrifice { value: Some(count) }
    }

    pub fn remove_counter(counter: CounterKind, count: u32) -> Self {
        Self::RemoveCounter {
            counter,
            value: Some(count),
        }
    }

    /// Raw tag as authored.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AbilityCost::Nectar { .. } => "nectar",
            AbilityCost::Discard { .. } => "discard",
            AbilityCost::Sacrifice { .. } => "sacrifice",
            AbilityCost::RemoveCounter { .. } => "remove-counter",
        }
    }

    /// Amount paid, defaulting to 1.
    pub fn amount(&self) -> u32 {
        let value = match self {
            AbilityCost::Nectar { value }
            | AbilityCost::Discard { value }
            | AbilityCost::Sacrifice { value }
            | AbilityCost::RemoveCounter { value, .. } => *value,
        };
        value.unwrap_or(1)
    }
}
