use serde::{Deserialize, Serialize};

/// Separator placed between consecutive stylesheet bodies in `css`
pub const STYLESHEET_SEPARATOR: &str = "\n\n/* --- next stylesheet --- */\n\n";

/// Structured content extracted from one successfully fetched page
///
/// Every field is always present; missing content is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteExtraction {
    /// URL as supplied by the caller
    pub url: String,

    /// Trimmed document title
    pub title: String,

    /// Meta description content
    #[serde(rename = "metaDesc")]
    pub meta_description: String,

    /// Sanitized HTML (scripts, styles and comments removed, size capped)
    pub html: String,

    /// Linked stylesheet bodies in link order, joined by `STYLESHEET_SEPARATOR`
    pub css: String,

    /// Whitespace-collapsed body text, length capped
    pub text_sample: String,
}
