//! Length-bounded previews of raw content for diagnostics.

/// Default preview bound, in characters.
pub const DEFAULT_PREVIEW_LEN: usize = 200;

const ELLIPSIS: &str = "...";

/// Bound `text` to at most `max_chars` characters.
///
/// Text that fits is returned unchanged. Longer text is cut on a character
/// boundary and suffixed with `...`, the suffix counting toward the bound, so
/// a truncated preview is always strictly shorter than its input. Bounds
/// too small to hold the suffix are hard cuts.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars - ELLIPSIS.len();
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(index, _)| index);
    format!("{}{ELLIPSIS}", &text[..cut])
}

/// Preview of a JSON value's compact serialization.
#[must_use]
pub fn preview_value(value: &serde_json::Value, max_chars: usize) -> String {
    preview(&value.to_string(), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(preview("{\"a\":1}", 200), "{\"a\":1}");
        let exact = "x".repeat(200);
        assert_eq!(preview(&exact, 200), exact);
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let long = "y".repeat(201);
        let out = preview(&long, 200);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 200);
        assert!(out.len() < long.len());
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundary() {
        let long = "學".repeat(300);
        let out = preview(&long, 200);
        assert_eq!(out.chars().count(), 200);
        assert!(out.starts_with("學學"));
    }

    #[rstest]
    #[case::zero(0, "")]
    #[case::one(1, "a")]
    #[case::ellipsis_width(3, "abc")]
    #[case::just_above(4, "a...")]
    fn tiny_bounds_never_exceed_max(#[case] max: usize, #[case] expected: &str) {
        let out = preview("abcdef", max);
        assert_eq!(out, expected);
        assert!(out.chars().count() <= max);
    }

    #[test]
    fn tiny_bound_keeps_short_input() {
        assert_eq!(preview("ab", 2), "ab");
        assert_eq!(preview("ab", 1), "a");
    }

    #[test]
    fn value_preview_uses_compact_json() {
        let value = serde_json::json!({"wrong": "fields"});
        assert_eq!(preview_value(&value, 200), r#"{"wrong":"fields"}"#);
    }
}
