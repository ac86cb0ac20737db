//! Expression evaluator

use super::matcher::{CachedMatcher, CompilingMatcher, TokenMatcher};
use crate::ast::{Expression, Operand, Verb};

/// Evaluates expressions against a feature set
///
/// `none_of` has a dedicated path. `all_of`, `any_of` and `n_of` share a
/// single counting path parameterized by the resolved threshold. Both
/// paths stop as soon as the outcome is known.
#[derive(Debug, Default, Clone)]
pub struct Evaluator<M = CompilingMatcher> {
    matcher: M,
}

impl Evaluator {
    /// Create an evaluator that compiles regex tokens on demand
    pub fn new() -> Self {
        Self::default()
    }
}

impl Evaluator<CachedMatcher> {
    /// Create an evaluator that memoizes compiled regex tokens
    pub fn cached() -> Self {
        Self::with_matcher(CachedMatcher::new())
    }
}

impl<M: TokenMatcher> Evaluator<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Evaluate `expr` against `features`
    pub fn evaluate<S: AsRef<str>>(&self, expr: &Expression, features: &[S]) -> bool {
        let result = match expr.verb() {
            Verb::NoneOf => self.eval_none_of(expr.operands(), features),
            _ => {
                let required = expr.threshold().resolve(expr.len());
                self.eval_counting(required, expr.operands(), features)
            }
        };

        log::trace!(
            "{} over {} operand(s) evaluated to {}",
            expr.verb(),
            expr.len(),
            result
        );
        result
    }

    fn eval_operand<S: AsRef<str>>(&self, operand: &Operand, features: &[S]) -> bool {
        match operand {
            Operand::Feature(token) => self.matcher.matches(token, features),
            Operand::SubExpression(expr) => self.evaluate(expr, features),
        }
    }

    fn eval_none_of<S: AsRef<str>>(&self, operands: &[Operand], features: &[S]) -> bool {
        !operands
            .iter()
            .any(|operand| self.eval_operand(operand, features))
    }

    fn eval_counting<S: AsRef<str>>(
        &self,
        required: usize,
        operands: &[Operand],
        features: &[S],
    ) -> bool {
        if required == 0 {
            return true;
        }

        let mut hits = 0;
        for operand in operands {
            if self.eval_operand(operand, features) {
                hits += 1;
                if hits >= required {
                    return true;
                }
            }
        }
        false
    }
}
