//! Canonical export
//!
//! Converts an [`Expression`] back into an untyped YAML node using the
//! normalized verb spellings, then optionally encodes it as text:
//!
//! ```yaml
//! all_of:
//! - item1
//! - any_of:
//!   - item2
//!   - item3
//! ```

use crate::error::{ParseError, Result};
use featlogic_core::{Expression, Operand};
use serde_yaml::{Mapping, Value as YamlValue};
use std::io::Write;

/// Canonical exporter
pub struct ExpressionExporter;

impl ExpressionExporter {
    /// Export to a single-verb YAML mapping
    pub fn export(expr: &Expression) -> YamlValue {
        let operands = expr.operands().iter().map(Self::export_operand).collect();

        let mut mapping = Mapping::new();
        mapping.insert(
            YamlValue::String(expr.verb().to_string()),
            YamlValue::Sequence(operands),
        );
        YamlValue::Mapping(mapping)
    }

    fn export_operand(operand: &Operand) -> YamlValue {
        match operand {
            Operand::Feature(token) => YamlValue::String(token.clone()),
            Operand::SubExpression(expr) => Self::export(expr),
        }
    }

    /// Encode the canonical form as YAML text
    pub fn to_canonical_text(expr: &Expression) -> Result<String> {
        serde_yaml::to_string(&Self::export(expr)).map_err(ParseError::Encode)
    }

    /// Write the canonical form as YAML to `writer`
    pub fn write_canonical<W: Write>(expr: &Expression, writer: W) -> Result<()> {
        serde_yaml::to_writer(writer, &Self::export(expr)).map_err(ParseError::Encode)
    }
}

/// Canonical YAML output for expressions
pub trait CanonicalText {
    fn to_canonical_text(&self) -> Result<String>;

    fn write_canonical<W: Write>(&self, writer: W) -> Result<()>;
}

impl CanonicalText for Expression {
    fn to_canonical_text(&self) -> Result<String> {
        ExpressionExporter::to_canonical_text(self)
    }

    fn write_canonical<W: Write>(&self, writer: W) -> Result<()> {
        ExpressionExporter::write_canonical(self, writer)
    }
}
