use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Cheap pre-check before any regex work.
pub const METADATA_MARKER: &str = "export const metadata";

// Non-greedy up to the first `}`. A nested object literal ends the match at
// its own closing brace, so keys after it are not rewritten.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)export const metadata = \{.*?\};?").expect("valid regex")
});
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<key>title\s*:\s*)'(?P<value>[^']*)'").expect("valid regex"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<key>description\s*:\s*)'(?P<value>[^']*)'").expect("valid regex")
});

const DOUBLE_QUOTED: &str = r#"${key}"${value}""#;

/// The first metadata block in `content`, if any.
pub fn find_metadata_block(content: &str) -> Option<&str> {
    BLOCK_RE.find(content).map(|m| m.as_str())
}

/// Rewrites `title: '...'` and `description: '...'` inside the first metadata
/// block to double quotes.
///
/// Returns `Cow::Borrowed` when nothing changed, so callers can tell a no-op
/// apart without comparing strings. Inner text is copied verbatim: a `"` in
/// the value is not escaped.
pub fn normalize_metadata_quotes(content: &str) -> Cow<'_, str> {
    if !content.contains(METADATA_MARKER) {
        return Cow::Borrowed(content);
    }
    let Some(m) = BLOCK_RE.find(content) else {
        tracing::trace!("marker present but no metadata block matched");
        return Cow::Borrowed(content);
    };
    let block = m.as_str();
    let titled = TITLE_RE.replace_all(block, DOUBLE_QUOTED);
    let fixed = DESCRIPTION_RE.replace_all(&titled, DOUBLE_QUOTED);
    if fixed == block {
        return Cow::Borrowed(content);
    }
    tracing::trace!(start = m.start(), end = m.end(), "rewrote metadata block");

    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..m.start()]);
    out.push_str(&fixed);
    out.push_str(&content[m.end()..]);
    Cow::Owned(out)
}
