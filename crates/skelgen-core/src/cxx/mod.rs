//! C++ generator — `scanf`-based input skeleton with static arrays
//!
//! # Pipeline
//!
//! `desc → constants → const lines`, `defs → declarations`, `defs → reads`,
//! then the three blocks are substituted into [`skeleton::TEMPLATE`].
//!
//! Declarations size arrays by the extracted `_MAX` constants; reads loop
//! over the count variables themselves.

pub mod decls;
pub mod reads;
pub mod shape;
pub mod skeleton;

use crate::constants::{BoundExtractor, ConstantExtractor, NamedConstant};
use crate::generator::Generator;
use crate::input_def::InputDef;
use crate::{Error, Result};

pub use shape::Shape;

/// C++ skeleton generator, parameterized over the constant extractor
#[derive(Debug, Clone, Default)]
pub struct CxxGenerator<E = BoundExtractor> {
    extractor: E,
}

impl CxxGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: ConstantExtractor> CxxGenerator<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn constants(&self, desc: &str) -> Result<Vec<NamedConstant>> {
        self.extractor.extract(desc)
    }

    /// Check every definition without emitting code
    ///
    /// Unlike [`Generator::generate`], keeps going after the first failure
    /// so that all broken definitions are reported at once.
    pub fn check(&self, defs: &[InputDef], desc: &str) -> CheckResult {
        let mut result = CheckResult::default();

        let consts = match self.constants(desc) {
            Ok(consts) => consts,
            Err(error) => {
                result.push(Severity::Error, None, error);
                return result;
            }
        };

        for (i, def) in defs.iter().enumerate() {
            let outcome = decls::gen_decls(std::slice::from_ref(def), &consts)
                .and_then(|_| reads::gen_reads(std::slice::from_ref(def)));
            match outcome {
                Ok(_) => {
                    // generate still emits these; the source will not compile as is
                    for error in decls::missing_widths(def, &consts) {
                        result.push(Severity::Warning, Some(i), error);
                    }
                }
                Err(error) => result.push(Severity::Error, Some(i), error),
            }
        }

        tracing::debug!(
            defs = defs.len(),
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "checked definitions"
        );
        result
    }
}

impl<E: ConstantExtractor> Generator for CxxGenerator<E> {
    fn ext(&self) -> &'static str {
        "cxx"
    }

    fn generate(&self, defs: &[InputDef], desc: &str) -> Result<String> {
        let consts = self.constants(desc)?;
        let const_lines = decls::gen_consts(&consts);
        let decl_lines = decls::gen_decls(defs, &consts)?;
        let read_lines = reads::gen_reads(defs)?;

        tracing::debug!(
            constants = consts.len(),
            defs = defs.len(),
            reads = read_lines.len(),
            "generated C++ skeleton"
        );
        Ok(skeleton::assemble(&const_lines, &decl_lines, &read_lines))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Generation fails
    Error,
    /// Generation succeeds but the source needs a hand edit to compile
    Warning,
}

/// One finding about a definition (or the description itself when `index` is None)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub index: Option<usize>,
    pub error: Error,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.index {
            Some(i) => write!(f, "definition {}: {}", i, self.error),
            None => write!(f, "description: {}", self.error),
        }
    }
}

/// Outcome of [`CxxGenerator::check`]
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    /// Returns true if no errors were found (warnings are OK)
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    fn push(&mut self, severity: Severity, index: Option<usize>, error: Error) {
        self.diagnostics.push(Diagnostic {
            severity,
            index,
            error,
        });
    }
}
