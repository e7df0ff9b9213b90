use std::sync::LazyLock;

use regex::Regex;

const NON_BREAKING_SPACE: char = '\u{00A0}';

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Normalize the visible text of a table cell: trim surrounding whitespace,
/// turn non-breaking spaces into regular spaces, collapse each run of
/// newlines into a single space. Interior runs of plain spaces are kept
/// as-is.
pub fn clean_text(raw: &str) -> String {
    let cleaned = raw.trim().replace(NON_BREAKING_SPACE, " ");
    NEWLINE_RUN.replace_all(&cleaned, " ").into_owned()
}
