//! Alphabetical body sorting with comment-aware keys

use crate::block::LineBlock;
use crate::config::LineConfig;

/// Derive the comparison key for one body line.
///
/// Strips a leading comment marker so in-body comments sort next to the
/// domain they describe, then trims whitespace and `.`/`/` from both
/// ends and case-folds.
pub fn sort_key(line: &str, config: &LineConfig) -> String {
    let stripped = line
        .strip_prefix(&config.comment_marker)
        .unwrap_or(line);
    stripped
        .trim_matches(|c: char| c.is_whitespace() || c == '.' || c == '/')
        .to_lowercase()
}

/// Permute a block's body lines into ascending key order.
///
/// Headers pass through untouched and no line ever crosses the
/// header/body boundary. Equal keys keep their original relative order
/// (decorate with the original index, then sort the tuples).
pub fn sort_block(block: &mut LineBlock, config: &LineConfig) {
    let mut decorated: Vec<(String, usize, String)> = std::mem::take(&mut block.body_lines)
        .into_iter()
        .enumerate()
        .map(|(index, line)| (sort_key(&line, config), index, line))
        .collect();
    decorated.sort();
    block.body_lines = decorated.into_iter().map(|(_, _, line)| line).collect();
}
