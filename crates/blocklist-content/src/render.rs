//! Target-format line rendering

use serde::{Deserialize, Serialize};

/// One rendering target: a line template plus format quirks.
///
/// Read-only once built; the same spec is shared across every input
/// file processed for one output target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Body-line template; `{url}` is replaced with the line content
    pub line_template: String,
    /// Replaces `{engine}` in header and comment lines
    pub engine: String,
    pub header_marker: String,
    pub comment_marker: String,
    /// Comment character of the target format, e.g. `#` for hosts
    pub comment_replacement: String,
    pub apply_prefix: bool,
    pub line_prefix: String,
    pub apply_suffix: bool,
    pub line_suffix: String,
    /// Hosts files cannot express paths; see [`render_line`]
    pub hosts_mode: bool,
}

impl FormatSpec {
    /// A spec with the default source grammar and no quirks.
    pub fn new(line_template: impl Into<String>, engine: impl Into<String>) -> Self {
        Self {
            line_template: line_template.into(),
            engine: engine.into(),
            header_marker: "! //".to_string(),
            comment_marker: "!".to_string(),
            comment_replacement: "!".to_string(),
            apply_prefix: false,
            line_prefix: String::new(),
            apply_suffix: false,
            line_suffix: String::new(),
            hosts_mode: false,
        }
    }

    pub fn with_comment_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.comment_replacement = replacement.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.apply_prefix = true;
        self.line_prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.apply_suffix = true;
        self.line_suffix = suffix.into();
        self
    }

    pub fn with_hosts_mode(mut self) -> Self {
        self.hosts_mode = true;
        self
    }

    /// Same target with a different engine label, e.g. a nuclear variant.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }
}

/// Render one line for a target format. Pure; exactly one terminated
/// output line, or the input unchanged when blank.
///
/// Header and comment lines get `{engine}` substitution and a one-shot
/// comment-marker translation, and never pass through the body
/// template. In hosts mode a path-like entry cannot be expressed as a
/// hosts entry, so it is emitted commented out behind a fixed gutter
/// instead of being substituted into the template.
pub fn render_line(line: &str, spec: &FormatSpec) -> String {
    if line.starts_with(&spec.header_marker) || line.starts_with(&spec.comment_marker) {
        let substituted = line.replace("{engine}", &spec.engine);
        return substituted.replacen(&spec.comment_marker, &spec.comment_replacement, 1);
    }

    if line.trim().is_empty() {
        return line.to_string();
    }

    let mut line = line.to_string();

    if spec.hosts_mode {
        line = line.trim_start_matches([' ', '.']).to_string();
        if line.trim_end().contains('/') {
            return format!("#       {}\n", line.trim_end());
        }
    }

    if spec.apply_prefix && !line.starts_with(&spec.line_prefix) {
        line.insert_str(0, &spec.line_prefix);
    }

    if spec.apply_suffix {
        line.truncate(line.trim_end().len());
        if !line.ends_with(&spec.line_suffix) {
            line.push_str(&spec.line_suffix);
        }
    }

    let template = spec.line_template.trim_end();
    format!("{}\n", template.replace("{url}", line.trim_end()))
}
