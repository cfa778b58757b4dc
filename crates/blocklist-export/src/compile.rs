//! Compiled-artifact concatenation

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::writer::{WriteOutcome, WritePolicy, create_new, prepare_destination};

/// Concatenate already-rendered files into one titled artifact.
///
/// Writes `title` plus a newline, then each constituent file verbatim
/// followed by a blank-line separator. Constituents are never
/// re-rendered; this is a byte-level concatenation of finished
/// outputs. Destination policy matches [`crate::write_format`].
pub fn compile_files(
    dest: &Path,
    inputs: &[PathBuf],
    title: &str,
    policy: WritePolicy,
) -> Result<WriteOutcome> {
    if let Some(skip) = prepare_destination(dest, policy)? {
        return Ok(skip);
    }

    let file = create_new(dest)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{title}").map_err(|e| Error::io(dest, e))?;

    for input in inputs {
        if !input.is_file() {
            warn!(path = %input.display(), "constituent is not a file, skipping");
            continue;
        }
        let content = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
        out.write_all(content.as_bytes())
            .map_err(|e| Error::io(dest, e))?;
        out.write_all(b"\n").map_err(|e| Error::io(dest, e))?;
    }

    out.flush().map_err(|e| Error::io(dest, e))?;
    debug!(path = %dest.display(), inputs = inputs.len(), "compiled artifact");
    Ok(WriteOutcome::Written)
}
