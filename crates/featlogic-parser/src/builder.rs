//! Expression builder
//!
//! Validates an untyped YAML node tree and constructs an [`Expression`].
//!
//! Grammar:
//! ```yaml
//! and:                 # single verb per mapping
//! - item1              # feature token
//! - or: [item2, item3] # nested expression
//! - not: [~extra]      # `~` marks a regex token
//! ```
//!
//! Verbs: `all_of`/`and`, `any_of`/`or`, `none_of`/`not`, and `<n>_of`.

use crate::config::BuilderOptions;
use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use featlogic_core::{Expression, Operand, Verb, REGEX_PREFIX};
use regex::Regex;
use serde_yaml::{Mapping, Value as YamlValue};
use std::io::Read;

/// Path of the document root in error messages
const ROOT_PATH: &str = "$";

/// Builds expressions from YAML
#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    options: BuilderOptions,
}

impl ExpressionBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options
    pub fn with_options(options: BuilderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Parse an expression from YAML text
    pub fn parse(&self, yaml: &str) -> Result<Expression> {
        let node = YamlParser::parse(yaml)?;
        self.build(&node)
    }

    /// Parse an expression from a YAML reader
    pub fn load<R: Read>(&self, reader: R) -> Result<Expression> {
        let node = YamlParser::parse_reader(reader)?;
        self.build(&node)
    }

    /// Build an expression from an already decoded node
    pub fn build(&self, node: &YamlValue) -> Result<Expression> {
        let mapping = node.as_mapping().ok_or_else(|| ParseError::ExpectedMapping {
            found: YamlParser::describe(node),
            path: ROOT_PATH.to_string(),
        })?;

        let expr = self.build_mapping(mapping, ROOT_PATH, 1)?;
        log::debug!(
            "Built {} expression with {} feature token(s), depth {}",
            expr.verb(),
            expr.features().len(),
            expr.depth()
        );
        Ok(expr)
    }

    fn build_mapping(&self, mapping: &Mapping, path: &str, depth: usize) -> Result<Expression> {
        if depth > self.options.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.options.max_depth,
                path: path.to_string(),
            });
        }

        let mut entries = mapping.iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(ParseError::WrongArity {
                    count: mapping.len(),
                    path: path.to_string(),
                })
            }
        };

        let name = key.as_str().ok_or_else(|| ParseError::UnknownVerb {
            verb: YamlParser::to_string(key),
            path: path.to_string(),
        })?;
        let verb = Verb::from_name(name).ok_or_else(|| ParseError::UnknownVerb {
            verb: name.to_string(),
            path: path.to_string(),
        })?;

        let items = value.as_sequence().ok_or_else(|| ParseError::ExpectedSequence {
            verb: name.to_string(),
            path: path.to_string(),
        })?;

        let mut operands = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{}.{}[{}]", path, name, index);
            operands.push(self.build_operand(item, &item_path, depth)?);
        }

        Ok(Expression::new(verb, operands))
    }

    fn build_operand(&self, item: &YamlValue, path: &str, depth: usize) -> Result<Operand> {
        match item {
            YamlValue::String(token) => {
                self.check_token(token, path)?;
                Ok(Operand::Feature(token.clone()))
            }
            YamlValue::Mapping(mapping) => {
                let nested = self.build_mapping(mapping, path, depth + 1)?;
                Ok(Operand::SubExpression(nested))
            }
            other => Err(ParseError::InvalidOperand {
                found: YamlParser::describe(other),
                path: path.to_string(),
            }),
        }
    }

    fn check_token(&self, token: &str, path: &str) -> Result<()> {
        if !self.options.validate_regex {
            return Ok(());
        }

        if let Some(pattern) = token.strip_prefix(REGEX_PREFIX) {
            Regex::new(pattern).map_err(|e| ParseError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
                path: path.to_string(),
            })?;
        }
        Ok(())
    }
}
