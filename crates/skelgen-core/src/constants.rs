//! Constant extraction — scrapes upper bounds out of constraint text
//!
//! Problem statements state their limits in prose, e.g.
//! `1 ≤ N ≤ 10^5` or `1 \leq |S| \leq 50`. Every `<ident> ≤ <int>[^<int>]`
//! clause becomes one named constant `<IDENT>_MAX`, used to size arrays.
//!
//! # Guarantees
//!
//! - **Ordered**: constants come out in scan order
//! - **Verbatim**: a name bounded twice yields two constants

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Characters removed before scanning (grouping, separators, LaTeX escapes)
const STRIPPED: &[char] = &[',', '\\', '(', ')', '{', '}', '|'];

/// Canonical comparison glyph every "less or equal" spelling is rewritten to
const LEQ: &str = "≦";

/// Name of the constant bounding `ident`
///
/// Shared by the extractor and every generator so that a size symbol and
/// the constant it refers to always agree.
pub fn constant_name(ident: &str) -> String {
    format!("{}_MAX", ident.to_uppercase())
}

/// An integer bound extracted from the description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedConstant {
    pub name: String,
    pub value: u64,
}

impl NamedConstant {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for NamedConstant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Source of named constants for a problem description
pub trait ConstantExtractor: Send + Sync {
    fn extract(&self, desc: &str) -> Result<Vec<NamedConstant>>;
}

/// Regex-based extractor for `<ident> ≤ <int>[^<int>]` clauses
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundExtractor;

impl ConstantExtractor for BoundExtractor {
    fn extract(&self, desc: &str) -> Result<Vec<NamedConstant>> {
        let text = normalize_leq(&strip_punctuation(desc));

        let mut consts = Vec::new();
        for cap in bound_pattern().captures_iter(&text) {
            let ident = &cap[1];
            let value = bound_value(&cap[2], cap.get(3).map(|m| m.as_str()))?;
            consts.push(NamedConstant::new(constant_name(ident), value));
        }

        tracing::debug!(count = consts.len(), "extracted constants");
        Ok(consts)
    }
}

/// Extract constants with the default [`BoundExtractor`]
pub fn extract(desc: &str) -> Result<Vec<NamedConstant>> {
    BoundExtractor.extract(desc)
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

fn normalize_leq(text: &str) -> String {
    leq_pattern().replace_all(text, LEQ).into_owned()
}

fn bound_value(base: &str, exponent: Option<&str>) -> Result<u64> {
    let overflow = || match exponent {
        Some(k) => Error::ConstantOverflow(format!("{}^{}", base, k)),
        None => Error::ConstantOverflow(base.to_string()),
    };

    let base: u64 = base.parse().map_err(|_| overflow())?;
    match exponent {
        None => Ok(base),
        Some(k) => {
            let k: u32 = k.parse().map_err(|_| overflow())?;
            base.checked_pow(k).ok_or_else(overflow)
        }
    }
}

#[allow(clippy::expect_used)]
fn leq_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)≤|leq").expect("valid regex"))
}

#[allow(clippy::expect_used)]
fn bound_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9a-z_]+)\s*≦\s*([0-9]+)(?:\^([0-9]+))?").expect("valid regex")
    })
}
