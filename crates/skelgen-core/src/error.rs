//! Error types for skeleton generation
//!
//! All fallible operations return `Result<T, Error>`.
//! Every variant describes a broken upstream contract; generation never
//! produces partial output.

use thiserror::Error;

use crate::input_def::{Container, Item};

/// Skeleton generation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Container/item pair with no declaration or read template
    #[error("Unsupported combination: {container} of {item}")]
    UnsupportedCombination { container: Container, item: Item },

    /// Symbolic size with no matching extracted constant
    #[error("Unresolved size: '{symbol}' needs constant {constant}")]
    UnresolvedSize { symbol: String, constant: String },

    /// String buffer whose width constant was not extracted
    #[error("Unresolved width: string '{name}' needs constant {constant}")]
    UnresolvedWidth { name: String, constant: String },

    /// Number of size expressions does not fit the container
    #[error("Size arity mismatch for {container}: expected {expected}, found {found}")]
    SizeArity {
        container: Container,
        expected: usize,
        found: usize,
    },

    /// Definition without variable names
    #[error("Empty names in {container} definition")]
    EmptyNames { container: Container },

    /// `harray`/`matrix` definition naming other than exactly one variable
    #[error("Name count for {container}: expected 1, found {found}")]
    NameCount { container: Container, found: usize },

    /// Same variable named twice in one definition
    #[error("Duplicate name '{0}' in definition")]
    DuplicateName(String),

    /// Bound in the description does not fit in 64 bits
    #[error("Constant overflow: {0}")]
    ConstantOverflow(String),

    /// Input definitions could not be decoded
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidDefinition(e.to_string())
    }
}

/// Result type alias for skeleton generation
pub type Result<T> = std::result::Result<T, Error>;
