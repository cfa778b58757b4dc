//! Input discovery and output compilation for blocklist-gen
//!
//! Drives the full cycle for one output target: discover input files,
//! stream each through reader -> expander -> renderer into a
//! destination file, then concatenate selected per-target files into a
//! single compiled artifact with an injected title line.
//!
//! Everything is sequential and blocking; a mid-write I/O failure
//! leaves a truncated destination and callers must treat non-success
//! as "state unknown, verify destination".

pub mod compile;
pub mod discover;
pub mod error;
pub mod writer;

pub use compile::compile_files;
pub use discover::{discover_files, discover_files_sorted};
pub use error::{Error, Result};
pub use writer::{WriteOutcome, WritePolicy, append_elements, prepare_output_root, write_format};
