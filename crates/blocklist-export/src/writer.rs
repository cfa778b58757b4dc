//! Per-format output writing

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use blocklist_content::{BlockReader, FormatSpec, LineConfig, render_line};

use crate::error::{Error, Result};

/// Overwrite behavior for existing destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePolicy {
    pub overwrite: bool,
}

impl Default for WritePolicy {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

/// How one destination write ended.
///
/// Skips are non-fatal; the run continues with the remaining targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Destination existed and overwriting is disabled
    SkippedExists,
    /// Destination is a directory; never overwritten
    SkippedIsDirectory,
}

impl WriteOutcome {
    pub fn was_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Ensure the output root exists and is a directory.
///
/// The only globally fatal destination condition: an output root that
/// exists as a regular file aborts the whole run.
pub fn prepare_output_root(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::OutputRootConflict {
            path: path.to_path_buf(),
        });
    }
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Render every input file into `dest` for one format.
///
/// Each input is streamed to exhaustion through reader -> expander ->
/// renderer; a blank line separates each input file's contribution.
/// Inputs that are not regular files are skipped with a warning.
pub fn write_format(
    dest: &Path,
    inputs: &[PathBuf],
    spec: &FormatSpec,
    policy: WritePolicy,
) -> Result<WriteOutcome> {
    if let Some(skip) = prepare_destination(dest, policy)? {
        return Ok(skip);
    }

    let file = create_new(dest)?;
    let mut out = BufWriter::new(file);
    let config = LineConfig::expanding();

    for input in inputs {
        if !input.is_file() {
            warn!(path = %input.display(), "input vanished or is not a file, skipping");
            continue;
        }
        let source = File::open(input).map_err(|e| Error::io(input, e))?;
        let mut reader = BlockReader::new(BufReader::new(source), config.clone());
        loop {
            let block = reader.next_block()?;
            for issue in reader.take_issues() {
                warn!(path = %input.display(), "skipping domains directive: {issue}");
            }
            if block.is_empty() {
                out.write_all(b"\n").map_err(|e| Error::io(dest, e))?;
                break;
            }
            for line in block.lines() {
                out.write_all(render_line(line, spec).as_bytes())
                    .map_err(|e| Error::io(dest, e))?;
            }
            out.write_all(b"\n").map_err(|e| Error::io(dest, e))?;
        }
    }

    out.flush().map_err(|e| Error::io(dest, e))?;
    debug!(path = %dest.display(), engine = %spec.engine, "wrote format output");
    Ok(WriteOutcome::Written)
}

/// Append element files to an already-written output.
///
/// Lines pass through the given spec, typically a bare `{url}`
/// passthrough, so hand-written filter rules land verbatim.
pub fn append_elements(dest: &Path, elements: &[PathBuf], spec: &FormatSpec) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .open(dest)
        .map_err(|e| Error::io(dest, e))?;
    let mut out = BufWriter::new(file);

    for path in elements {
        if !path.is_file() {
            warn!(path = %path.display(), "element path is not a file, skipping");
            continue;
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        for line in content.lines() {
            let terminated = format!("{line}\n");
            out.write_all(render_line(&terminated, spec).as_bytes())
                .map_err(|e| Error::io(dest, e))?;
        }
    }

    out.flush().map_err(|e| Error::io(dest, e))
}

/// Apply the destination policy, removing an existing file when
/// overwriting is allowed.
pub(crate) fn prepare_destination(
    dest: &Path,
    policy: WritePolicy,
) -> Result<Option<WriteOutcome>> {
    if dest.is_dir() {
        warn!(path = %dest.display(), "target is a directory, skipping write");
        return Ok(Some(WriteOutcome::SkippedIsDirectory));
    }
    if dest.exists() {
        if !policy.overwrite {
            warn!(
                path = %dest.display(),
                "target exists and overwriting is disabled, skipping write"
            );
            return Ok(Some(WriteOutcome::SkippedExists));
        }
        fs::remove_file(dest).map_err(|e| Error::io(dest, e))?;
    }
    Ok(None)
}

pub(crate) fn create_new(dest: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(|e| Error::io(dest, e))
}
