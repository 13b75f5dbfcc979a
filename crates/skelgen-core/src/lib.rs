//! skelgen core — input-format to program-skeleton generation
//!
//! Turns a contest problem's input format, already parsed into a list of
//! [`InputDef`]s, plus the free-text constraints into a compilable program
//! that declares every variable and reads stdin in the right order.
//!
//! # Architecture
//!
//! ```text
//! desc ──→ ConstantExtractor ──→ NamedConstant*
//!                                     ↓
//! InputDef* ──→ Generator (declarations + reads) ──→ skeleton ──→ source
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same definitions and description, same bytes out
//! - **Order preserving**: reads follow the definition order exactly
//! - **All or nothing**: malformed definitions fail, never half a program

pub mod constants;
pub mod cxx;
pub mod error;
pub mod generator;
pub mod input_def;
pub mod problem;

pub use constants::{constant_name, BoundExtractor, ConstantExtractor, NamedConstant};
pub use cxx::CxxGenerator;
pub use error::{Error, Result};
pub use generator::Generator;
pub use input_def::{Container, InputDef, Item, SizeExpr};
pub use problem::{Problem, SourceSample};

/// Generate a C++ skeleton with the default extractor
pub fn generate(defs: &[InputDef], desc: &str) -> Result<String> {
    CxxGenerator::new().generate(defs, desc)
}
