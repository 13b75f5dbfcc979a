//! scanf read statements, one per definition, in stdin order
//!
//! Loop bounds are the size expressions as written (the count variables read
//! earlier on stdin), not their `_MAX` constants.

use super::shape::Shape;
use crate::input_def::InputDef;
use crate::Result;

/// Loop variables, outermost first
const LOOP_VARS: [&str; 2] = ["i", "j"];

/// Read statements for every definition, in input order
pub fn gen_reads(defs: &[InputDef]) -> Result<Vec<String>> {
    defs.iter().map(gen_read).collect()
}

fn gen_read(def: &InputDef) -> Result<String> {
    def.validate()?;
    let shape = Shape::of(def.container, def.item)?;

    let fmt = shape.format().repeat(def.names.len());
    let addrs = def
        .names
        .iter()
        .map(|v| shape.address(v))
        .collect::<Vec<_>>()
        .join(", ");

    let mut stmt = String::new();
    for (var, size) in LOOP_VARS.iter().zip(&def.size).take(shape.loop_depth()) {
        stmt.push_str(&format!("REP({}, {}) ", var, size));
    }
    stmt.push_str(&format!("scanf(\"{}\", {});", fmt, addrs));
    Ok(stmt)
}
