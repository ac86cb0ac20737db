//! Expression AST nodes

use super::verb::{Threshold, Verb};
use crate::eval::Evaluator;
use regex::Regex;
use serde::de::{self, Deserializer, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix marking a feature token as a regular expression
pub const REGEX_PREFIX: char = '~';

/// A logic expression over feature tokens
///
/// Serializes to its canonical form: a single-entry map from the
/// normalized verb to the operand list. Deserializing accepts every verb
/// spelling and rejects `~` tokens whose pattern does not compile, so an
/// expression can be embedded as a field of a host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    verb: Verb,
    operands: Vec<Operand>,
}

/// One element of an expression's operand list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Feature token; a leading `~` makes the remainder a regex
    Feature(String),
    /// Nested expression
    SubExpression(Expression),
}

impl Expression {
    /// Create an expression
    pub fn new(verb: Verb, operands: Vec<Operand>) -> Self {
        // `0_of` only ever exists as `none_of`
        let verb = match verb {
            Verb::NOf(n) => Verb::n_of(n),
            other => other,
        };
        Self { verb, operands }
    }

    /// Create an `all_of` expression
    pub fn all_of(operands: Vec<Operand>) -> Self {
        Self::new(Verb::AllOf, operands)
    }

    /// Create an `any_of` expression
    pub fn any_of(operands: Vec<Operand>) -> Self {
        Self::new(Verb::AnyOf, operands)
    }

    /// Create a `none_of` expression
    pub fn none_of(operands: Vec<Operand>) -> Self {
        Self::new(Verb::NoneOf, operands)
    }

    /// Create an `n_of` expression (`0_of` becomes `none_of`)
    pub fn n_of(n: usize, operands: Vec<Operand>) -> Self {
        Self::new(Verb::n_of(n), operands)
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn threshold(&self) -> Threshold {
        self.verb.threshold()
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Evaluate against a feature set, compiling regex tokens on demand.
    ///
    /// Use an [`Evaluator`] built with [`Evaluator::cached`] to reuse
    /// compiled patterns across calls.
    pub fn eval<S: AsRef<str>>(&self, features: &[S]) -> bool {
        Evaluator::new().evaluate(self, features)
    }

    /// All feature tokens in the tree, depth-first in source order
    pub fn features(&self) -> Vec<&str> {
        let mut result = Vec::new();
        self.collect_features(&mut result);
        result
    }

    fn collect_features<'a>(&'a self, result: &mut Vec<&'a str>) {
        for operand in &self.operands {
            match operand {
                Operand::Feature(token) => result.push(token.as_str()),
                Operand::SubExpression(expr) => expr.collect_features(result),
            }
        }
    }

    /// Nesting depth; a flat expression has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .operands
            .iter()
            .filter_map(|operand| match operand {
                Operand::SubExpression(expr) => Some(expr.depth()),
                Operand::Feature(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl Operand {
    /// Create a feature operand
    pub fn feature(token: impl Into<String>) -> Self {
        Operand::Feature(token.into())
    }

    /// Create a nested expression operand
    pub fn expression(expr: Expression) -> Self {
        Operand::SubExpression(expr)
    }

    /// Feature token, if this operand is one
    pub fn as_feature(&self) -> Option<&str> {
        match self {
            Operand::Feature(token) => Some(token.as_str()),
            Operand::SubExpression(_) => None,
        }
    }

    /// Regex source of a `~`-prefixed feature token
    pub fn regex_pattern(&self) -> Option<&str> {
        self.as_feature()?.strip_prefix(REGEX_PREFIX)
    }

    pub fn is_regex(&self) -> bool {
        self.regex_pattern().is_some()
    }
}

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        Operand::SubExpression(expr)
    }
}

impl From<&str> for Operand {
    fn from(token: &str) -> Self {
        Operand::Feature(token.to_string())
    }
}

impl From<String> for Operand {
    fn from(token: String) -> Self {
        Operand::Feature(token)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.verb, &self.operands)?;
        map.end()
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Feature(token) => serializer.serialize_str(token),
            Operand::SubExpression(expr) => expr.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExpressionVisitor)
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OperandVisitor)
    }
}

struct ExpressionVisitor;

impl<'de> Visitor<'de> for ExpressionVisitor {
    type Value = Expression;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single-entry map from a verb to a list of operands")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Expression, A::Error> {
        let name: String = map
            .next_key()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let verb = Verb::from_name(&name)
            .ok_or_else(|| A::Error::custom(format!("unknown verb '{}'", name)))?;
        let operands: Vec<Operand> = map.next_value()?;

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(A::Error::custom(
                "expected exactly one verb per expression mapping",
            ));
        }
        Ok(Expression::new(verb, operands))
    }
}

struct OperandVisitor;

impl<'de> Visitor<'de> for OperandVisitor {
    type Value = Operand;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a feature token or a nested expression")
    }

    fn visit_str<E: de::Error>(self, token: &str) -> Result<Operand, E> {
        self.visit_string(token.to_string())
    }

    fn visit_string<E: de::Error>(self, token: String) -> Result<Operand, E> {
        if let Some(pattern) = token.strip_prefix(REGEX_PREFIX) {
            Regex::new(pattern)
                .map_err(|e| E::custom(format!("invalid regex '{}': {}", pattern, e)))?;
        }
        Ok(Operand::Feature(token))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Operand, A::Error> {
        ExpressionVisitor.visit_map(map).map(Operand::SubExpression)
    }
}
