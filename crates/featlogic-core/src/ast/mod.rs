//! Abstract Syntax Tree (AST) definitions for feature expressions
//!
//! An expression is a verb (`all_of`, `any_of`, `none_of` or `n_of`)
//! applied to an ordered list of operands. Each operand is either a
//! feature token or a nested expression.

pub mod expression;
pub mod verb;

pub use expression::{Expression, Operand, REGEX_PREFIX};
pub use verb::{Threshold, Verb};
