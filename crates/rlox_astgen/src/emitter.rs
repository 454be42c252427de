//! Rust source emitter for the node schema.
//!
//! Emits one file per base type: an enum with one variant per node kind and
//! one struct per node kind holding its declared fields as plain immutable
//! data. Other target languages get their own emitter; the schema stays
//! shared.

use crate::schema::NodeKind;
use std::fmt::Write;

/// Render the generated Rust source for a base type and its node kinds.
pub fn emit_rust(base_name: &str, nodes: &[NodeKind]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "//! {} tree nodes.", base_name);
    let _ = writeln!(out, "//!");
    let _ = writeln!(out, "//! Generated by rlox-astgen. Do not edit by hand.");
    let _ = writeln!(out);
    let _ = writeln!(out, "use rlox_scanner::{{Literal as LiteralValue, Token}};");
    let _ = writeln!(out);

    // The base abstraction: one enum variant per node kind.
    let _ = writeln!(out, "#[derive(Debug, Clone)]");
    let _ = writeln!(out, "pub enum {} {{", base_name);
    for node in nodes {
        let _ = writeln!(out, "    {}({}),", node.name, node.name);
    }
    let _ = writeln!(out, "}}");

    // One struct per node kind.
    for node in nodes {
        let _ = writeln!(out);
        let _ = writeln!(out, "#[derive(Debug, Clone)]");
        let _ = writeln!(out, "pub struct {} {{", node.name);
        for field in node.fields {
            let _ = writeln!(out, "    pub {}: {},", field.name, field.ty);
        }
        let _ = writeln!(out, "}}");
    }

    out
}

/// The output file name for a base type, e.g. `expr.rs` for `Expr`.
pub fn rust_file_name(base_name: &str) -> String {
    format!("{}.rs", base_name.to_lowercase())
}
