use crate::utils::truncate_chars;

/// Whitespace as matched by `\s` in browser regular expressions: Unicode
/// White_Space without NEL (U+0085), plus the byte order mark
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Collapses every run of whitespace into a single space and trims both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapsed, trimmed text capped to `max_chars` characters
pub fn sample(text: &str, max_chars: usize) -> String {
    let collapsed = collapse_whitespace(text);
    truncate_chars(&collapsed, max_chars).to_string()
}
