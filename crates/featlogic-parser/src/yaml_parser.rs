//! YAML Parser
//!
//! Decodes YAML text into untyped `serde_yaml::Value` nodes and renders
//! nodes for error messages.

use crate::error::Result;
use serde_yaml::Value as YamlValue;
use std::io::Read;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Parse YAML from a reader into a YAML value
    pub fn parse_reader<R: Read>(reader: R) -> Result<YamlValue> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Name of the node kind, e.g. "sequence"
    pub fn kind(value: &YamlValue) -> &'static str {
        match value {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "boolean",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Tagged(_) => "tagged value",
        }
    }

    /// Short description of a node for error messages, e.g. "number 42"
    pub fn describe(value: &YamlValue) -> String {
        match value {
            YamlValue::Null => "null".to_string(),
            YamlValue::Bool(b) => format!("boolean {}", b),
            YamlValue::Number(n) => format!("number {}", n),
            YamlValue::String(s) => format!("string '{}'", s),
            YamlValue::Sequence(seq) => format!("sequence of {} item(s)", seq.len()),
            YamlValue::Mapping(map) => format!("mapping of {} key(s)", map.len()),
            YamlValue::Tagged(t) => format!("tagged value {}", t.tag),
        }
    }

    /// Render a scalar key as text
    pub fn to_string(value: &YamlValue) -> String {
        match value {
            YamlValue::Null => "null".to_string(),
            YamlValue::Bool(b) => b.to_string(),
            YamlValue::Number(n) => n.to_string(),
            YamlValue::String(s) => s.clone(),
            other => Self::describe(other),
        }
    }
}
