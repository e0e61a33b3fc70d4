//! Sol compiler driver.
//!
//! Ties the phases together: read a source file, parse it with
//! [`sol_parse`], encode it with [`sol_emit`], and write the artifacts
//! the runtime consumes -- the raw `.solbin` binary and/or a generated
//! `.c` translation unit that embeds the binary and hands it to the
//! runtime.
//!
//! The library surface is used by the `solc` binary and by tests; the
//! binary itself only adds flag parsing and diagnostics.

mod gen_c;
pub mod tracing_setup;

pub use gen_c::generate_c;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Compilation failure: the first malformed construct aborts the unit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The reader rejected the source.
    #[error("error while parsing source: {0}")]
    Parse(#[from] sol_parse::ParseError),
    /// The emitter rejected the tree.
    #[error("error while emitting binary: {0}")]
    Emit(#[from] sol_emit::EmitError),
}

/// Driver failure: compilation plus the surrounding file I/O.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A file could not be read or written.
    #[error("file '{}' could not be {action}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// What was attempted: `"read"` or `"written"`.
        action: &'static str,
        /// The underlying error.
        source: io::Error,
    },
    /// The source failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Compile source text to the `SOLBIN` artifact.
pub fn compile(source: &str) -> Result<Vec<u8>, CompileError> {
    let program = sol_parse::parse(source)?;
    let binary = sol_emit::emit(&program)?;
    debug!(bytes = binary.len(), "compiled source");
    Ok(binary)
}

/// Which artifacts the driver writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outputs {
    /// Write the raw `.solbin` binary.
    pub binary: bool,
    /// Write the generated `.c` wrapper.
    pub c_source: bool,
}

/// Derive an output path from the input path by replacing the
/// extension.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Compile `input` and write the requested artifacts next to it.
pub fn compile_file(input: &Path, outputs: Outputs) -> Result<(), DriverError> {
    let read_err = |source| DriverError::Io {
        path: input.to_path_buf(),
        action: "read",
        source,
    };
    let source = fs::read_to_string(input).map_err(read_err)?;
    let binary = compile(&source)?;

    if outputs.binary {
        let path = output_path(input, "solbin");
        fs::write(&path, &binary).map_err(|source| DriverError::Io {
            path,
            action: "written",
            source,
        })?;
    }

    if outputs.c_source {
        let path = output_path(input, "c");
        let source_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let write_err = |source| DriverError::Io {
            path: output_path(input, "c"),
            action: "written",
            source,
        };
        let file = fs::File::create(&path).map_err(write_err)?;
        let mut writer = io::BufWriter::new(file);
        generate_c(&binary, &source_name, &mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }

    Ok(())
}
