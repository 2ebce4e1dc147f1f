//! JSON extraction from free-form provider output.
//!
//! Providers are asked for bare JSON but routinely wrap it in markdown code
//! fences or surround it with prose. Extraction strips fences, then slices
//! out the most plausible JSON span before handing it to `serde_json`.
//!
//! Two strategies are available:
//! - [`ExtractionStrategy::FirstLast`] (default): first `{`/`[` to the last
//!   matching closer. Cheap, but two unrelated fragments in one response can
//!   be straddled into a single (usually unparseable) span.
//! - [`ExtractionStrategy::Balanced`]: string-aware bracket matching from the
//!   first opener, so trailing prose and later fragments are ignored.

use lesson_core::RawContent;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FENCE: &str = "```";

/// How to locate the JSON span inside cleaned text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    #[default]
    FirstLast,
    Balanced,
}

/// Parse raw provider content into a JSON value.
///
/// Already-parsed content is returned as is.
///
/// # Errors
///
/// Returns the `serde_json` error when the located span is not valid JSON.
pub fn extract_json(raw: &RawContent, strategy: ExtractionStrategy) -> Result<Value, serde_json::Error> {
    match raw {
        RawContent::Parsed(value) => Ok(value.clone()),
        RawContent::Text(text) => serde_json::from_str(locate_json(strip_fences(text), strategy)),
    }
}

/// Remove an enclosing markdown code fence and surrounding whitespace.
///
/// Only a leading ```` ``` ```` / ```` ```json ```` and a trailing
/// ```` ``` ```` are removed; fence markers inside the document (for example
/// in a string value) are left alone. A fence preceded by prose is handled
/// by span location instead.
#[must_use]
pub fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix(FENCE).unwrap_or(inner).trim()
}

/// Slice the most plausible JSON span out of fence-free text.
///
/// Text with no bracket at all is returned unchanged so the parser reports
/// the failure.
#[must_use]
pub fn locate_json(text: &str, strategy: ExtractionStrategy) -> &str {
    match strategy {
        ExtractionStrategy::FirstLast => first_last_span(text),
        ExtractionStrategy::Balanced => balanced_span(text).unwrap_or_else(|| first_last_span(text)),
    }
}

fn first_last_span(text: &str) -> &str {
    if text.starts_with('{') || text.starts_with('[') {
        return text;
    }
    let Some((start, close)) = first_opener(text) else {
        return text;
    };
    match text.rfind(close) {
        Some(end) if end > start => &text[start..=end],
        _ => &text[start..],
    }
}

fn balanced_span(text: &str) -> Option<&str> {
    let (start, close) = first_opener(text)?;
    let open = if close == '}' { '{' } else { '[' };

    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            c if c == open => depth += 1,
            c if c == close => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Byte offset of the earliest `{` or `[`, and the closer that matches it.
fn first_opener(text: &str) -> Option<(usize, char)> {
    match (text.find('{'), text.find('[')) {
        (Some(o), Some(a)) if a < o => Some((a, ']')),
        (Some(o), _) => Some((o, '}')),
        (None, Some(a)) => Some((a, ']')),
        (None, None) => None,
    }
}
