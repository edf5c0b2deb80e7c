//! Ability catalog for lookup by name.
//!
//! The `AbilityCatalog` holds a game's authored abilities in the order they
//! were registered and indexes them by name. It is an ordinary value: build
//! one per game or per test, there is no global instance.

use log::info;
use rustc_hash::FxHashMap;

use crate::describe::Describer;
use crate::error::{CatalogError, Result};

use super::ability::StructuredAbility;
use super::audit::{audit, AbilityIssue};

/// Registry of structured abilities.
///
/// ## Example
///
/// ```
/// use ccg_abilities::abilities::{AbilityCatalog, StructuredAbility};
/// use ccg_abilities::effects::AbilityEffect;
///
/// let mut catalog = AbilityCatalog::new();
/// catalog
///     .register(StructuredAbility::new("Card Draw").with_effect(AbilityEffect::draw(1)))
///     .unwrap();
///
/// let found = catalog.get("Card Draw").unwrap();
/// assert_eq!(found.effects.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    abilities: Vec<StructuredAbility>,
    by_name: FxHashMap<String, usize>,
}

impl AbilityCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability.
    ///
    /// Names are unique; registering a second ability with the same name
    /// fails and leaves the catalog unchanged.
    pub fn register(&mut self, ability: StructuredAbility) -> Result<()> {
        if self.by_name.contains_key(&ability.name) {
            return Err(CatalogError::DuplicateAbility(ability.name));
        }
        self.by_name.insert(ability.name.clone(), self.abilities.len());
        self.abilities.push(ability);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StructuredAbility> {
        self.by_name.get(name).map(|&index| &self.abilities[index])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StructuredAbility> {
        self.abilities.iter()
    }

    /// Load a catalog from a JSON array of abilities.
    pub fn from_json(json: &str) -> Result<Self> {
        let abilities: Vec<StructuredAbility> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for ability in abilities {
            catalog.register(ability)?;
        }
        info!("loaded {} abilities from JSON", catalog.len());
        Ok(catalog)
    }

    /// Serialize as a JSON array in registration order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.abilities)?)
    }

    /// Render every ability, as `(name, text)` pairs in registration order.
    pub fn describe_all(&self, describer: &Describer) -> Vec<(String, String)> {
        self.abilities
            .iter()
            .map(|ability| (ability.name.clone(), describer.describe(ability)))
            .collect()
    }

    /// Audit every ability, as `(name, issue)` pairs in registration order.
    pub fn audit(&self) -> Vec<(String, AbilityIssue)> {
        self.abilities
            .iter()
            .flat_map(|ability| {
                audit(ability)
                    .into_iter()
                    .map(move |issue| (ability.name.clone(), issue))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AbilityCatalog {
    type Item = &'a StructuredAbility;
    type IntoIter = std::slice::Iter<'a, StructuredAbility>;

    fn into_iter(self) -> Self::IntoIter {
        self.abilities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::AbilityEffect;
    use crate::vocabulary::{AbilityTarget, AbilityTrigger};

    fn quick_strike() -> StructuredAbility {
        StructuredAbility::new("Quick Strike")
            .with_trigger(AbilityTrigger::Passive)
            .with_effect(AbilityEffect::remove_summoning_sickness(AbilityTarget::SelfUnit))
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = AbilityCatalog::new();
        catalog.register(quick_strike()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Quick Strike"));
        assert_eq!(catalog.get("Quick Strike"), Some(&quick_strike()));
        assert!(catalog.get("Missing").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = AbilityCatalog::new();
        catalog.register(quick_strike()).unwrap();

        let err = catalog.register(quick_strike()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAbility(ref name) if name == "Quick Strike"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut catalog = AbilityCatalog::new();
        for name in ["Zeta", "Alpha", "Mu"] {
            catalog.register(StructuredAbility::new(name)).unwrap();
        }
        let names: Vec<&str> = catalog.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_empty() {
        let catalog = AbilityCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.describe_all(&Describer::default()).is_empty());
        assert!(catalog.audit().is_empty());
    }
}
