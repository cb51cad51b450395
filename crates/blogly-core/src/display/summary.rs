//! Content truncation for list views.

/// Content longer than this many characters gets cut for the homepage.
pub const SUMMARY_THRESHOLD: usize = 255;

/// Number of characters kept when content is cut.
pub const SUMMARY_CUTOFF: usize = 252;

/// The list-view form of a post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary<'a> {
    pub text: &'a str,
    pub truncated: bool,
}

/// Shorten `content` for list display.
///
/// Lengths are counted in characters, so multi-byte text is never split
/// inside a code point.
pub fn summarize(content: &str) -> Summary<'_> {
    if content.chars().count() > SUMMARY_THRESHOLD {
        Summary {
            text: prefix(content, SUMMARY_CUTOFF),
            truncated: true,
        }
    } else {
        Summary {
            text: content,
            truncated: false,
        }
    }
}

/// The first `n` characters of `s` (or all of it if shorter).
pub fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
