//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed YAML text
    #[error("YAML parsing error: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// Canonical YAML could not be written
    #[error("YAML encoding error: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// Expression node is not a mapping
    #[error("Expected a single-verb mapping at {path}, got {found}")]
    ExpectedMapping { found: String, path: String },

    /// Expression mapping does not have exactly one verb
    #[error("Expected 1 verb at {path}, got {count}")]
    WrongArity { count: usize, path: String },

    /// Operator spelling not recognized
    #[error("Invalid verb at {path}: {verb}")]
    UnknownVerb { verb: String, path: String },

    /// Operator value is not a sequence
    #[error("Operands of '{verb}' at {path} must be a sequence")]
    ExpectedSequence { verb: String, path: String },

    /// Operand is neither a feature string nor a nested expression
    #[error("Invalid operand at {path}: {found}")]
    InvalidOperand { found: String, path: String },

    /// Expression nested deeper than allowed
    #[error("Expression at {path} exceeds maximum depth of {max_depth}")]
    TooDeep { max_depth: usize, path: String },

    /// Regex feature token does not compile
    #[error("Invalid regex '{pattern}' at {path}: {message}")]
    InvalidRegex {
        pattern: String,
        message: String,
        path: String,
    },
}

impl ParseError {
    /// Location of a structural error within the document
    pub fn path(&self) -> Option<&str> {
        match self {
            ParseError::Decode(_) | ParseError::Encode(_) => None,
            ParseError::ExpectedMapping { path, .. }
            | ParseError::WrongArity { path, .. }
            | ParseError::UnknownVerb { path, .. }
            | ParseError::ExpectedSequence { path, .. }
            | ParseError::InvalidOperand { path, .. }
            | ParseError::TooDeep { path, .. }
            | ParseError::InvalidRegex { path, .. } => Some(path),
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
