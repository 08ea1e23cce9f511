//! Strips executable and style content from raw HTML before it is parsed.
//!
//! This is pattern-based removal, not HTML normalization: an opening tag
//! without a matching close is left in place as literal text.

use crate::utils::truncate_to_bytes;
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?</script>").expect("script pattern is valid"));

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>").expect("style pattern is valid"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

/// Removes script blocks, style blocks and comments, in that order, then
/// truncates the result to `max_bytes`.
pub fn sanitize(raw_html: &str, max_bytes: usize) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(raw_html, "");
    let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");
    let mut html = COMMENT.replace_all(&without_styles, "").into_owned();

    if html.len() > max_bytes {
        ::log::debug!(
            "Sanitized HTML is {} bytes, truncating to {}",
            html.len(),
            max_bytes
        );
        truncate_to_bytes(&mut html, max_bytes);
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: usize = 800_000;

    #[test]
    fn test_strips_script_style_and_comments() {
        let out = sanitize(
            "<p>hi</p><script>evil()</script><style>.a{}</style><!--c-->",
            CAP,
        );
        assert!(!out.contains("<script"));
        assert!(!out.contains("<style"));
        assert!(!out.contains("<!--"));
        assert_eq!(out, "<p>hi</p>");
    }

    #[test]
    fn test_case_insensitive_and_multiline() {
        let out = sanitize(
            "a<SCRIPT type=\"text/javascript\">\nvar x = 1;\n</Script>b<Style>\nbody{}\n</STYLE>c",
            CAP,
        );
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_non_greedy_spans() {
        let out = sanitize("<script>1</script>keep<script>2</script>", CAP);
        assert_eq!(out, "keep");
    }

    #[test]
    fn test_unterminated_script_left_as_text() {
        let out = sanitize("<p>x</p><script>never closed", CAP);
        assert_eq!(out, "<p>x</p><script>never closed");
    }

    #[test]
    fn test_comment_hiding_script_close() {
        // Scripts are removed first, so the comment is gone with the script block
        let out = sanitize("<script><!-- </script> -->tail", CAP);
        assert_eq!(out, " -->tail");
    }

    #[test]
    fn test_truncates_after_stripping() {
        let raw = format!("<script>{}</script>{}", "x".repeat(100), "y".repeat(20));
        let out = sanitize(&raw, 10);
        assert_eq!(out, "y".repeat(10));
    }

    #[test]
    fn test_truncation_keeps_valid_utf8() {
        let out = sanitize("ééééé", 5);
        assert_eq!(out, "éé");
    }
}
