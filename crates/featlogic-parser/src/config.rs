//! Configuration types for the expression builder

use serde::{Deserialize, Serialize};

/// Default nesting limit for expression documents
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Builder options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Maximum expression nesting depth; the root counts as depth 1
    pub max_depth: usize,

    /// Compile `~` regex tokens while building and reject invalid ones
    pub validate_regex: bool,
}

impl BuilderOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            validate_regex: true,
        }
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable build-time regex validation
    pub fn validate_regex(mut self, enable: bool) -> Self {
        self.validate_regex = enable;
        self
    }
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self::new()
    }
}
