//! Header+body line blocks

/// One header+body unit of a list file.
///
/// All header lines precede all body lines; a line is classified as
/// header-side only while no body line has been seen in the block.
/// Every stored line carries exactly one trailing newline, except blank
/// header-side separators which are stored as a bare `"\n"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBlock {
    /// Raw header lines, in input order
    pub header_lines: Vec<String>,
    /// Content lines, in input order until sorted
    pub body_lines: Vec<String>,
}

impl LineBlock {
    /// True when the block has neither headers nor body.
    ///
    /// The reader yields an empty block once the stream is exhausted,
    /// so this doubles as the end-of-stream sentinel.
    pub fn is_empty(&self) -> bool {
        self.header_lines.is_empty() && self.body_lines.is_empty()
    }

    /// Iterate header lines followed by body lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header_lines
            .iter()
            .chain(self.body_lines.iter())
            .map(String::as_str)
    }
}
