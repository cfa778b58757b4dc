//! Line classification and normalization configuration

use serde::{Deserialize, Serialize};

/// Immutable configuration for reading one list file.
///
/// The comment marker must be checked after the header marker: the
/// default header marker `"! //"` is itself prefixed by the default
/// comment marker `"!"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Prefix identifying a block-starting header line
    pub header_marker: String,
    /// Prefix identifying any comment line
    pub comment_marker: String,
    /// Prefix enforced on body lines when `apply_url_prefix` is set
    pub url_prefix: String,
    pub apply_url_prefix: bool,
    /// Suffix enforced on body lines when `apply_url_suffix` is set
    pub url_suffix: String,
    pub apply_url_suffix: bool,
    /// Multiply body lines by the block's `domains=` directive
    pub expand_domains: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            header_marker: "! //".to_string(),
            comment_marker: "!".to_string(),
            url_prefix: ".".to_string(),
            apply_url_prefix: false,
            url_suffix: "/".to_string(),
            apply_url_suffix: false,
            expand_domains: false,
        }
    }
}

impl LineConfig {
    /// Default grammar with domain expansion enabled.
    ///
    /// This is the configuration used on the render path; pure-sort
    /// previews keep expansion off so expanded duplicates never reach
    /// the sorter.
    pub fn expanding() -> Self {
        Self {
            expand_domains: true,
            ..Self::default()
        }
    }
}
