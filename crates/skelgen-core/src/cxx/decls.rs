//! Variable declarations sized by the extracted constants

use std::collections::BTreeSet;

use super::shape::Shape;
use crate::constants::{constant_name, NamedConstant};
use crate::input_def::{InputDef, Item, SizeExpr};
use crate::{Error, Result};

/// Resolves array dimensions against the constants declared in the skeleton
pub(crate) struct SizeResolver<'a> {
    declared: BTreeSet<&'a str>,
}

impl<'a> SizeResolver<'a> {
    pub(crate) fn new(consts: &'a [NamedConstant]) -> Self {
        Self {
            declared: consts.iter().map(|c| c.name.as_str()).collect(),
        }
    }

    pub(crate) fn declares(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Literal sizes stay verbatim, symbols become their `_MAX` constant
    pub(crate) fn resolve(&self, size: &SizeExpr) -> Result<String> {
        match size {
            SizeExpr::Literal(n) => Ok(n.to_string()),
            SizeExpr::Symbol(sym) => {
                let name = constant_name(sym);
                if self.declares(&name) {
                    Ok(name)
                } else {
                    Err(Error::UnresolvedSize {
                        symbol: sym.clone(),
                        constant: name,
                    })
                }
            }
        }
    }
}

/// Render `const int` lines for the extracted constants
pub fn gen_consts(consts: &[NamedConstant]) -> Vec<String> {
    consts
        .iter()
        .map(|c| format!("const int {} = {};", c.name, c.value))
        .collect()
}

/// Declarations for every definition, concatenated in input order
pub fn gen_decls(defs: &[InputDef], consts: &[NamedConstant]) -> Result<Vec<String>> {
    let sizes = SizeResolver::new(consts);
    let mut out = Vec::new();
    for def in defs {
        out.extend(gen_decl(def, &sizes)?);
    }
    Ok(out)
}

/// String buffers of `def` whose `_MAX` width has no extracted constant
///
/// Declarations still reference these constants; this only reports them.
pub fn missing_widths(def: &InputDef, consts: &[NamedConstant]) -> Vec<Error> {
    if def.item != Item::String {
        return Vec::new();
    }
    let sizes = SizeResolver::new(consts);
    def.names
        .iter()
        .map(|v| (v, constant_name(v)))
        .filter(|(_, name)| !sizes.declares(name))
        .map(|(v, constant)| Error::UnresolvedWidth {
            name: v.clone(),
            constant,
        })
        .collect()
}

fn gen_decl(def: &InputDef, sizes: &SizeResolver) -> Result<Vec<String>> {
    def.validate()?;
    let shape = Shape::of(def.container, def.item)?;
    let dims = def
        .size
        .iter()
        .map(|sz| sizes.resolve(sz))
        .collect::<Result<Vec<_>>>()?;
    let names = &def.names;

    let lines = match shape {
        Shape::SingleNumber => vec![format!("int {};", names.join(", "))],
        Shape::SingleString => names
            .iter()
            .map(|v| format!("char {}[{} + 1];", v, constant_name(v)))
            .collect(),
        Shape::HArrayNumber | Shape::VArrayNumber => names
            .iter()
            .map(|v| format!("int {}[{}];", v, dims[0]))
            .collect(),
        Shape::HArrayString | Shape::VArrayString => names
            .iter()
            .map(|v| format!("char {}[{}][{} + 1];", v, dims[0], constant_name(v)))
            .collect(),
        Shape::HArrayChar => names
            .iter()
            .map(|v| format!("char {}[{} + 1];", v, dims[0]))
            .collect(),
        Shape::MatrixNumber => names
            .iter()
            .map(|v| format!("int {}[{}][{}];", v, dims[0], dims[1]))
            .collect(),
        Shape::MatrixString => names
            .iter()
            .map(|v| {
                format!(
                    "char {}[{}][{}][{} + 1];",
                    v,
                    dims[0],
                    dims[1],
                    constant_name(v)
                )
            })
            .collect(),
        Shape::MatrixChar => names
            .iter()
            .map(|v| format!("char {}[{}][{} + 1];", v, dims[0], dims[1]))
            .collect(),
    };
    Ok(lines)
}
