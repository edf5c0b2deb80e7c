//! Description renderer.
//!
//! Turns a [`StructuredAbility`](crate::abilities::StructuredAbility) into
//! display text. Everything here is a pure function of its input:
//!
//! - Resolvers map single vocabulary values to fragments
//!   ([`trigger_text`], [`cost_text`], [`target_text`], [`duration_text`],
//!   [`condition_text`])
//! - [`effect_text`] renders one effect as a clause
//! - [`combine`] joins clauses into a sentence
//! - [`describe`] / [`Describer`] assemble the full text
//!
//! Output is fixed English with no markup. Unknown tags degrade to their
//! raw spelling rather than failing.

mod combine;
mod config;
mod describer;
mod effect_text;
mod resolvers;

pub use combine::{combine, join_conjunctive, join_disjunctive};
pub use config::DescribeConfig;
pub use describer::{describe, Describer};
pub use effect_text::effect_text;
pub use resolvers::{condition_text, cost_text, duration_text, target_text, trigger_text};
