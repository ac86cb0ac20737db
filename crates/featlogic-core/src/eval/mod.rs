//! Evaluation of expressions against a feature set
//!
//! The [`Evaluator`] walks an expression tree; a [`TokenMatcher`] decides
//! whether a single feature token is present. Two matchers are provided:
//! - [`CompilingMatcher`] compiles regex tokens on every visit
//! - [`CachedMatcher`] keeps compiled patterns in a concurrent map

mod evaluator;
mod matcher;

pub use evaluator::Evaluator;
pub use matcher::{CachedMatcher, CompilingMatcher, TokenMatcher};
