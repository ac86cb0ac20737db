//! featlogic Core - Expression tree and evaluator for feature expressions
//!
//! This crate provides the types shared across featlogic:
//! - AST definitions (expressions, operands, verbs and thresholds)
//! - Evaluation of an expression against a feature set
//! - Token matchers for literal and regex feature tokens
//!
//! Parsing from YAML and canonical export live in `featlogic-parser`.

pub mod ast;
pub mod eval;

// Re-export commonly used types
pub use ast::{Expression, Operand, Threshold, Verb, REGEX_PREFIX};
pub use eval::{CachedMatcher, CompilingMatcher, Evaluator, TokenMatcher};
