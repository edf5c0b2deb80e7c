//! Abilities: the authored aggregate and its catalog.
//!
//! - [`StructuredAbility`]: trigger, cost, effects, usage caps
//! - [`AbilityCatalog`]: name-indexed registry with JSON loading
//! - [`audit`]: authoring checks that never reject data

mod ability;
mod audit;
mod catalog;

pub use ability::StructuredAbility;
pub use audit::{audit, AbilityIssue};
pub use catalog::AbilityCatalog;
