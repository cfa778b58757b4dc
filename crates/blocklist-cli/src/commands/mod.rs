//! Command implementations for blocklist-cli

pub mod generate;
pub mod sort;

pub use generate::run_generate;
pub use sort::run_sort;
