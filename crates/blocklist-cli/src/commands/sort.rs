//! Sort command implementation
//!
//! Alphabetizes every block of one list file and writes the result to
//! `sorted_<name>` beside the input. Expansion stays off here: sorting
//! an expanded list would scatter each domain's copies across the
//! whole block.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

use colored::Colorize;

use blocklist_content::{BlockReader, LineConfig, sort_block};

use crate::error::{CliError, Result};

/// Run the sort command
pub fn run_sort(file: &Path) -> Result<()> {
    if !file.is_file() {
        return Err(CliError::user(format!(
            "path {} is not a valid file",
            file.display()
        )));
    }

    let name = file
        .file_name()
        .ok_or_else(|| CliError::user(format!("path {} has no file name", file.display())))?;
    let target = file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("sorted_{}", name.to_string_lossy()));

    let source = File::open(file)?;
    let output = sort_to_string(BufReader::new(source))?;

    let mut out = match OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(CliError::user(format!(
                "target {} already exists, not overwriting",
                target.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    out.write_all(output.as_bytes())?;

    println!("{} wrote {}", "OK".green().bold(), target.display());
    Ok(())
}

/// Sort every block of a line source into one output string.
///
/// Blocks stay separated by single blank lines; trailing blank lines
/// are trimmed so the file ends right after its last real line.
fn sort_to_string(source: impl std::io::BufRead) -> Result<String> {
    let config = LineConfig::default();
    let mut reader = BlockReader::new(source, config.clone());
    let mut output = String::new();

    loop {
        let mut block = reader.next_block()?;
        if block.is_empty() {
            break;
        }
        sort_block(&mut block, &config);
        for line in block.lines() {
            output.push_str(line);
        }
        output.push('\n');
    }

    while output.ends_with("\n\n") {
        output.pop();
    }
    Ok(output)
}
