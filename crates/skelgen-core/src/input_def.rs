//! Input definitions — the typed description of one problem's stdin
//!
//! An input definition list is produced by an upstream format parser and
//! consumed read-only by every generator. Position in the list is the order
//! in which values appear on standard input.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How the values of one input line are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// One or more independent scalars
    Single,
    /// One variable indexed along one dimension (`A_1 ... A_N`)
    #[serde(alias = "h-array")]
    HArray,
    /// Parallel one-dimensional arrays read row by row
    #[serde(alias = "v-array")]
    VArray,
    /// One two-dimensional variable
    Matrix,
}

impl Container {
    /// Number of size expressions a definition of this container carries
    pub fn arity(self) -> usize {
        match self {
            Container::Single => 0,
            Container::HArray | Container::VArray => 1,
            Container::Matrix => 2,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Container::Single => "single",
            Container::HArray => "harray",
            Container::VArray => "varray",
            Container::Matrix => "matrix",
        };
        f.write_str(name)
    }
}

/// Scalar kind of each leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Number,
    String,
    /// Fixed-width run of characters read as one buffer
    #[serde(alias = "character")]
    Char,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Item::Number => "number",
            Item::String => "string",
            Item::Char => "char",
        };
        f.write_str(name)
    }
}

/// One array dimension: a literal count or the name of a count variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSize", into = "RawSize")]
pub enum SizeExpr {
    Literal(u64),
    Symbol(String),
}

impl SizeExpr {
    pub fn literal(n: u64) -> Self {
        SizeExpr::Literal(n)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        SizeExpr::Symbol(name.into())
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SizeExpr::Literal(n) => write!(f, "{}", n),
            SizeExpr::Symbol(s) => f.write_str(s),
        }
    }
}

impl FromStr for SizeExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidDefinition("empty size expression".into()));
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            let n = s
                .parse::<u64>()
                .map_err(|e| Error::InvalidDefinition(format!("size '{}': {}", s, e)))?;
            Ok(SizeExpr::Literal(n))
        } else {
            Ok(SizeExpr::Symbol(s.to_string()))
        }
    }
}

impl From<u64> for SizeExpr {
    fn from(n: u64) -> Self {
        SizeExpr::Literal(n)
    }
}

/// Wire form of a size: JSON number or string
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(u64),
    Text(String),
}

impl TryFrom<RawSize> for SizeExpr {
    type Error = Error;

    fn try_from(raw: RawSize) -> Result<Self> {
        match raw {
            RawSize::Number(n) => Ok(SizeExpr::Literal(n)),
            RawSize::Text(s) => s.parse(),
        }
    }
}

impl From<SizeExpr> for RawSize {
    fn from(size: SizeExpr) -> Self {
        match size {
            SizeExpr::Literal(n) => RawSize::Number(n),
            SizeExpr::Symbol(s) => RawSize::Text(s),
        }
    }
}

/// One line of the input format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDef {
    pub container: Container,
    pub item: Item,
    pub names: Vec<String>,
    #[serde(default)]
    pub size: Vec<SizeExpr>,
}

impl InputDef {
    pub fn new<I, S>(container: Container, item: Item, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            container,
            item,
            names: names.into_iter().map(Into::into).collect(),
            size: Vec::new(),
        }
    }

    pub fn with_size<I>(mut self, size: I) -> Self
    where
        I: IntoIterator<Item = SizeExpr>,
    {
        self.size = size.into_iter().collect();
        self
    }

    /// Check the structural rules every generator relies on:
    /// non-empty unique names, one name for `harray`/`matrix`, and a size
    /// arity matching the container.
    pub fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(Error::EmptyNames {
                container: self.container,
            });
        }

        if matches!(self.container, Container::HArray | Container::Matrix)
            && self.names.len() != 1
        {
            return Err(Error::NameCount {
                container: self.container,
                found: self.names.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for name in &self.names {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateName(name.clone()));
            }
        }

        let expected = self.container.arity();
        if self.size.len() != expected {
            return Err(Error::SizeArity {
                container: self.container,
                expected,
                found: self.size.len(),
            });
        }

        Ok(())
    }
}
