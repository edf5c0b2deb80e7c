//! Describer configuration.

use serde::{Deserialize, Serialize};

/// Presentation options for rendered ability text.
///
/// The default reproduces the canonical phrasing; each option only drops
/// or reshapes parts of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeConfig {
    /// Append `(Nx per turn)` / `(once per game)` suffixes.
    pub usage_limits: bool,

    /// Append condition clauses (`if damaged`) to effects.
    pub conditions: bool,

    /// Upper-case the first character of the output.
    pub capitalize: bool,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            usage_limits: true,
            conditions: true,
            capitalize: false,
        }
    }
}

impl DescribeConfig {
    /// Include or omit usage-limit suffixes.
    pub fn with_usage_limits(mut self, enabled: bool) -> Self {
        self.usage_limits = enabled;
        self
    }

    /// Include or omit condition clauses.
    pub fn with_conditions(mut self, enabled: bool) -> Self {
        self.conditions = enabled;
        self
    }

    /// Capitalize the first character (for tooltips).
    pub fn capitalized(mut self) -> Self {
        self.capitalize = true;
        self
    }
}
