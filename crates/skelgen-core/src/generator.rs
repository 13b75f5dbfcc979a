//! Target-language generator seam

use crate::input_def::InputDef;
use crate::problem::Problem;
use crate::Result;

/// Turns input definitions plus constraint text into one source file
pub trait Generator: Send + Sync {
    /// Extension recorded on the generated [`crate::SourceSample`]
    fn ext(&self) -> &'static str;

    /// Produce the complete source text
    ///
    /// # Errors
    /// Fails on any definition the generator has no template for, or whose
    /// sizes do not resolve. No partial source is returned.
    fn generate(&self, defs: &[InputDef], desc: &str) -> Result<String>;

    /// Generate from a problem and record the result on it
    fn process(&self, pbm: &mut Problem) -> Result<()> {
        let src = self.generate(&pbm.defs, &pbm.desc)?;
        pbm.add_src(self.ext(), src);
        Ok(())
    }
}
