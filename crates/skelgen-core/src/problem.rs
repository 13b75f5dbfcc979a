//! Problem record handed between the format parser, generators and emitter

use serde::{Deserialize, Serialize};

use crate::input_def::InputDef;
use crate::Result;

/// One generated source file and its language extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSample {
    pub ext: String,
    pub txt: String,
}

/// A contest problem: its id, constraint text, input format and the
/// sources generated for it so far
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Problem {
    pub q: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub defs: Vec<InputDef>,
    #[serde(default)]
    pub srcs: Vec<SourceSample>,
}

impl Problem {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn add_src(&mut self, ext: impl Into<String>, txt: impl Into<String>) {
        self.srcs.push(SourceSample {
            ext: ext.into(),
            txt: txt.into(),
        });
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
