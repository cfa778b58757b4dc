//! Block reading, sorting, and format rendering for blocklist-gen
//!
//! The core pipeline: a [`BlockReader`] turns a line source into
//! header+body [`LineBlock`]s, [`sort_block`] alphabetizes a block's body,
//! and [`render_line`] maps each line into one target output format.
//! Everything here is filesystem-free; callers supply any `BufRead`.

pub mod block;
pub mod config;
pub mod error;
pub mod reader;
pub mod render;
pub mod sort;

pub use block::LineBlock;
pub use config::LineConfig;
pub use error::{Error, Result};
pub use reader::{BlockReader, DirectiveIssue};
pub use render::{FormatSpec, render_line};
pub use sort::{sort_block, sort_key};
