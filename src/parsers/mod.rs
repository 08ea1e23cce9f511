pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::ExtractorConfig;

/// Structured fields read from one sanitized page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Trimmed text of the first `<title>`
    pub title: String,
    /// `content` of the first `<meta name="description">`
    pub meta_description: String,
    /// Raw `href` values of stylesheet links, in document order
    pub stylesheets: Vec<String>,
    /// Whitespace-collapsed body text
    pub text_sample: String,
}

/// Reads the structured fields out of sanitized HTML
pub struct Parser;

impl Parser {
    /// Parse a page and extract every field the extractor needs
    ///
    /// The parsed tree does not outlive this call, so callers can hold the
    /// result across await points.
    pub fn parse_page(html: &str, config: &ExtractorConfig) -> ParseResult {
        let doc = html::parse(html);

        let title = doc
            .first_by_tag_name("title")
            .map(|el| html::text_content(&el).trim_matches(text::is_space).to_string())
            .unwrap_or_default();

        let meta_description = doc
            .find_by_attribute("name", Some("description"))
            .into_iter()
            .find(|el| el.value().name() == "meta")
            .and_then(|el| el.value().attr("content").map(str::to_string))
            .unwrap_or_default();

        let stylesheets = doc
            .find_by_attribute("rel", Some("stylesheet"))
            .into_iter()
            .filter(|el| el.value().name() == "link")
            .filter_map(|el| el.value().attr("href"))
            .filter(|href| !href.is_empty())
            .take(config.max_stylesheets)
            .map(str::to_string)
            .collect::<Vec<_>>();

        let text_sample = doc
            .first_by_tag_name("body")
            .map(|el| text::sample(&html::text_content(&el), config.text_sample_chars))
            .unwrap_or_default();

        ::log::debug!(
            "Parsed page: title={:?}, {} stylesheet links, {} chars of text",
            title,
            stylesheets.len(),
            text_sample.chars().count()
        );

        ParseResult {
            title,
            meta_description,
            stylesheets,
            text_sample,
        }
    }
}
