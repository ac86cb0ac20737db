//! Verbs and thresholds for feature expressions

use serde::{Serialize, Serializer};
use std::fmt;

/// Normalized operator of an expression
///
/// Source spellings are folded on parse: `and` becomes [`Verb::AllOf`],
/// `or` becomes [`Verb::AnyOf`], `not` and `0_of` become [`Verb::NoneOf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Every operand must match (`all_of`, `and`)
    AllOf,
    /// At least one operand must match (`any_of`, `or`)
    AnyOf,
    /// No operand may match (`none_of`, `not`, `0_of`)
    NoneOf,
    /// At least `n` operands must match (`<n>_of`)
    NOf(usize),
}

/// Minimum number of matching operands for a counting verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold {
    /// Equal to the operand count, resolved at evaluation time
    All,
    /// A fixed lower bound
    AtLeast(usize),
}

impl Verb {
    /// Normalize an operator spelling.
    ///
    /// Returns `None` for anything outside the closed set, including an
    /// `_of` suffix whose prefix is not a non-negative integer.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "not" | "none_of" => Some(Verb::NoneOf),
            "and" | "all_of" => Some(Verb::AllOf),
            "or" | "any_of" => Some(Verb::AnyOf),
            _ => {
                // Signed parse so that `-0_of` is accepted as `none_of`
                let count = name.strip_suffix("_of")?.parse::<i64>().ok()?;
                let count = usize::try_from(count).ok()?;
                Some(Verb::n_of(count))
            }
        }
    }

    /// Create an `n_of` verb, folding `0_of` into `none_of`
    pub fn n_of(n: usize) -> Self {
        if n == 0 {
            Verb::NoneOf
        } else {
            Verb::NOf(n)
        }
    }

    /// Threshold carried by this verb
    pub fn threshold(&self) -> Threshold {
        match self {
            Verb::AllOf => Threshold::All,
            Verb::AnyOf => Threshold::AtLeast(1),
            Verb::NoneOf => Threshold::AtLeast(0),
            Verb::NOf(n) => Threshold::AtLeast(*n),
        }
    }

    /// Returns true for verbs evaluated by counting matches
    pub fn is_counting(&self) -> bool {
        !matches!(self, Verb::NoneOf)
    }
}

impl Threshold {
    /// Resolve to a concrete count for an expression with `operand_count` operands
    pub fn resolve(self, operand_count: usize) -> usize {
        match self {
            Threshold::All => operand_count,
            Threshold::AtLeast(n) => n,
        }
    }

    /// Integer form, with `-1` standing for [`Threshold::All`]
    pub fn as_i64(self) -> i64 {
        match self {
            Threshold::All => -1,
            Threshold::AtLeast(n) => n as i64,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::AllOf => f.write_str("all_of"),
            Verb::AnyOf => f.write_str("any_of"),
            Verb::NoneOf => f.write_str("none_of"),
            Verb::NOf(n) => write!(f, "{}_of", n),
        }
    }
}

impl Serialize for Verb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
