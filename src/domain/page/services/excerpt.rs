// src/domain/page/services/excerpt.rs
//! Plain-text excerpt extraction from page metadata and rich body content.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

pub const DEFAULT_WORD_LIMIT: usize = 20;

/// Short plain-text summary of a page. A non-empty meta description wins
/// unchanged; otherwise the HTML body is attribute-escaped, limited to the
/// first `word_limit` whitespace-delimited words, entity-decoded and
/// stripped of tags. Returns `None` when neither source has content, so
/// callers can tell "nothing to show" apart from an empty string.
///
/// Word-limiting happens before tag removal: a tag straddling the word
/// boundary is cut and the remainder stripped afterwards.
pub fn short_description(
    meta_description: &str,
    content: &str,
    word_limit: usize,
) -> Option<String> {
    if !meta_description.trim().is_empty() {
        return Some(meta_description.to_string());
    }
    if content.trim().is_empty() {
        return None;
    }

    let escaped = html_escape::encode_quoted_attribute(content);
    let limited = limit_word_count(&escaped, word_limit);
    let decoded = html_escape::decode_html_entities(&limited);
    // Source `&nbsp;` survives the escape/decode round trip as literal
    // text; drop it along with newlines and decoded non-breaking spaces.
    let cleaned: String = decoded
        .replace("&nbsp;", "")
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\u{a0}'))
        .collect();
    let text = TAG_RE.replace_all(&cleaned, "");

    Some(text.trim().to_string())
}

/// Keep the first `limit` whitespace-delimited words.
fn limit_word_count(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
