//! rlox-astgen: Offline generator for tree-node boilerplate.
//!
//! Usage:
//!   rlox-astgen <OUT_DIR>
//!
//! Writes the generated expression-node source file into the given output
//! directory. This is a build-time tool; the scanner has no runtime
//! dependency on it.

mod emitter;
mod schema;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "rlox-astgen", about = "Generate rlox tree-node definitions")]
struct Cli {
    /// Directory the generated source files are written into.
    #[arg(value_name = "OUT_DIR")]
    output_dir: PathBuf,
}

#[derive(Debug, Error)]
enum GenerateError {
    #[error("output directory '{}' does not exist", .0.display())]
    MissingOutputDir(PathBuf),
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() {
    // A missing OUT_DIR argument makes clap exit with a non-zero status.
    let cli = Cli::parse();

    if let Err(e) = generate(&cli.output_dir) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn generate(output_dir: &Path) -> Result<(), GenerateError> {
    if !output_dir.is_dir() {
        return Err(GenerateError::MissingOutputDir(output_dir.to_path_buf()));
    }

    let source = emitter::emit_rust(schema::EXPR_BASE, schema::EXPR_NODES);
    let path = output_dir.join(emitter::rust_file_name(schema::EXPR_BASE));
    std::fs::write(&path, source).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;

    println!("wrote {}", path.display());
    Ok(())
}
