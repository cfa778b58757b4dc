//! Streaming block reader with one-line backtracking

use std::io::BufRead;

use crate::block::LineBlock;
use crate::config::LineConfig;
use crate::error::{Error, Result};

/// A malformed `domains=` directive, reported but never fatal.
///
/// The directive is skipped; expansion for the rest of the file is
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveIssue {
    /// 1-based line number of the offending header line
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for DirectiveIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Streams header+body [`LineBlock`]s out of a line source.
///
/// A block ends where the next header-marker line begins; that line is
/// pushed back into a one-line buffer so the following call starts
/// exactly on it. Backtracking is bounded to that single line.
///
/// Once the stream is exhausted the accumulated block is flushed and
/// every later call yields an empty block.
pub struct BlockReader<R> {
    source: R,
    config: LineConfig,
    /// One-line read-ahead buffer; the whole backtracking mechanism
    pushed_back: Option<String>,
    line_no: usize,
    issues: Vec<DirectiveIssue>,
}

impl<R: BufRead> BlockReader<R> {
    pub fn new(source: R, config: LineConfig) -> Self {
        Self {
            source,
            config,
            pushed_back: None,
            line_no: 0,
            issues: Vec::new(),
        }
    }

    /// Read the next block.
    ///
    /// Returns an empty block once the stream is exhausted; callers
    /// loop until [`LineBlock::is_empty`].
    pub fn next_block(&mut self) -> Result<LineBlock> {
        let mut block = LineBlock::default();
        // Block-scoped: cleared here, never carried across blocks.
        let mut domains: Vec<String> = Vec::new();

        loop {
            let Some(line) = self.next_line()? else {
                break;
            };

            // Header marker first: it is a superset of the comment marker.
            if line.starts_with(&self.config.header_marker) {
                if block.body_lines.is_empty() {
                    block.header_lines.push(terminated(&line));
                    continue;
                }
                // Start of the next block; rewind by one line and yield.
                self.pushed_back = Some(line);
                break;
            }

            if line.starts_with(&self.config.comment_marker) {
                if block.body_lines.is_empty() {
                    if self.config.expand_domains {
                        match self.parse_directive(&line) {
                            Ok(Some(mut parsed)) => domains.append(&mut parsed),
                            Ok(None) => {}
                            Err(Error::Directive { line, message }) => {
                                self.issues.push(DirectiveIssue { line, message });
                            }
                            Err(other) => return Err(other),
                        }
                    }
                    block.header_lines.push(terminated(&line));
                } else {
                    // In-body comments are sortable data.
                    block.body_lines.push(terminated(&line));
                }
                continue;
            }

            if line.trim().is_empty() {
                if block.body_lines.is_empty() {
                    // Header-side whitespace travels with the header.
                    block.header_lines.push("\n".to_string());
                }
                // Blanks are never retained inside a body.
                continue;
            }

            let line = self.normalize_body_line(line);
            if self.config.expand_domains && !domains.is_empty() {
                for domain in &domains {
                    block.body_lines.push(format!("{domain}{line}"));
                }
            } else {
                block.body_lines.push(line);
            }
        }

        Ok(block)
    }

    /// Drain directive issues collected so far.
    pub fn take_issues(&mut self) -> Vec<DirectiveIssue> {
        std::mem::take(&mut self.issues)
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.pushed_back.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        if self.source.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    /// Try to parse a header comment as a `domains=` directive.
    ///
    /// Returns `Ok(None)` when the comment is not a directive at all.
    fn parse_directive(&self, line: &str) -> Result<Option<Vec<String>>> {
        let stripped = line.trim_matches(|c: char| {
            c.is_whitespace() || self.config.comment_marker.contains(c)
        });
        let Some(payload) = stripped.strip_prefix("domains=") else {
            return Ok(None);
        };
        let domains: Vec<String> = serde_json::from_str(payload)
            .map_err(|e| Error::directive(self.line_no, e.to_string()))?;
        Ok(Some(domains))
    }

    fn normalize_body_line(&self, mut line: String) -> String {
        if self.config.apply_url_prefix && !line.starts_with(&self.config.url_prefix) {
            line.insert_str(0, &self.config.url_prefix);
        }
        if self.config.apply_url_suffix {
            line.truncate(line.trim_end().len());
            if !line.ends_with(&self.config.url_suffix) {
                line.push_str(&self.config.url_suffix);
            }
        }
        // Every non-empty line gets exactly one trailing newline,
        // regardless of the source line-ending style.
        format!("{}\n", line.trim_end())
    }
}

fn terminated(line: &str) -> String {
    format!("{}\n", line.trim_end_matches(['\r', '\n']))
}

impl<R: BufRead> Iterator for BlockReader<R> {
    type Item = Result<LineBlock>;

    /// Yields non-empty blocks; ends at the stream-exhausted sentinel.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_block() {
            Ok(block) if block.is_empty() => None,
            Ok(block) => Some(Ok(block)),
            Err(e) => Some(Err(e)),
        }
    }
}
