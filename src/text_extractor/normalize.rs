//! Text normalization for extracted article prose.
//!
//! Removes bracketed annotations (`[1]`, `[edit]`, `[citation needed]`) and
//! collapses whitespace so each article comes out as a single clean line.

use regex::Regex;
use std::sync::LazyLock;

// Non-greedy, and `.` spans newlines so an annotation broken across lines is
// still removed before whitespace collapsing joins the line back together.
static BRACKET_ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[.*?\]").expect("BRACKET_ANNOTATION_RE: hardcoded regex is valid")
});

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN_RE: hardcoded regex is valid"));

/// Strip bracket annotations, collapse whitespace runs to one space, trim.
///
/// Idempotent: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
///
/// # Example
/// ```
/// # use kodegen_tools_wikiscrape::text_extractor::normalize_text;
/// assert_eq!(normalize_text("  Rust[1] is\n\n a language[edit] "), "Rust is a language");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let stripped = BRACKET_ANNOTATION_RE.replace_all(text.trim(), "");
    let collapsed = WHITESPACE_RUN_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
