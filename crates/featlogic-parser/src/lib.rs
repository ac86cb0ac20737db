//! featlogic Parser - YAML front end for feature expressions
//!
//! This crate parses YAML documents into `featlogic_core::Expression`
//! trees and exports trees back to canonical YAML.
//!
//! ```yaml
//! and:
//! - item1
//! - or: [item2, item3]
//! - not: [~extra]
//! ```
//!
//! The document above reads "item1 and (item2 or item3) and no feature
//! matching the regex `extra`".

pub mod builder;
pub mod config;
pub mod error;
pub mod exporter;
pub mod yaml_parser;

use featlogic_core::Expression;
use serde_yaml::Value as YamlValue;
use std::io::Read;

// Re-export main parser types
pub use builder::ExpressionBuilder;
pub use config::BuilderOptions;
pub use error::{ParseError, Result};
pub use exporter::{CanonicalText, ExpressionExporter};
pub use yaml_parser::YamlParser;

/// Parse an expression from YAML text with default options
pub fn parse(yaml: &str) -> Result<Expression> {
    ExpressionBuilder::new().parse(yaml)
}

/// Parse an expression from a YAML reader with default options
pub fn load<R: Read>(reader: R) -> Result<Expression> {
    ExpressionBuilder::new().load(reader)
}

/// Build an expression from a decoded YAML node with default options
pub fn from_value(node: &YamlValue) -> Result<Expression> {
    ExpressionBuilder::new().build(node)
}
