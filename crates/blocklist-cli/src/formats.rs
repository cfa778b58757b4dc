//! Built-in rendering targets

use blocklist_content::FormatSpec;

/// Title injected into compiled uBlock Origin and uBlacklist artifacts
pub const COMPILED_TITLE: &str = "! Title: Huge AI Blocklist (Compiled)";
/// Nuclear-variant compiled title
pub const COMPILED_TITLE_NUCLEAR: &str = "! Title: Huge AI Blocklist (Nuclear) (Compiled)";
/// Compiled hosts title; hosts files comment with `#`
pub const COMPILED_TITLE_HOSTS: &str = "# Title: Huge AI Blocklist (Compiled)";

/// The two hosts-file targets: bare domains and the `www.` variant.
pub fn hosts_formats() -> Vec<FormatSpec> {
    vec![
        FormatSpec::new("0.0.0.0 {url}", "hosts")
            .with_comment_replacement("#")
            .with_hosts_mode(),
        FormatSpec::new("0.0.0.0 www{url}", "hosts-www")
            .with_comment_replacement("#")
            .with_prefix(".")
            .with_hosts_mode(),
    ]
}

/// The uBlacklist match-pattern target.
pub fn ublacklist() -> FormatSpec {
    FormatSpec::new("*://*{url}*", "uBlacklist")
        .with_comment_replacement("#")
        .with_prefix(".")
        .with_suffix("/")
}

/// One uBlock Origin cosmetic-filter target per search engine.
///
/// The `:upward()` chains differ per engine because each result page
/// nests its anchors differently.
pub fn ublock_engines() -> Vec<FormatSpec> {
    vec![
        FormatSpec::new(
            "google.com##a[href*=\"{url}\"]:upward(2):remove()",
            "google",
        ),
        FormatSpec::new(
            "duckduckgo.com##a[href*=\"{url}\"]:upward(figure):upward(1):remove()",
            "duckduckgo",
        ),
        FormatSpec::new("bing.com##a[href*=\"{url}\"]:upward(li):remove()", "bing"),
    ]
}

/// Verbatim passthrough for hand-written element rules.
pub fn element_passthrough() -> FormatSpec {
    FormatSpec::new("{url}", "")
}
