use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, HtmlTreeSink};

/// A leniently parsed HTML document
///
/// Parsing never fails: malformed or truncated markup is recovered the way a
/// browser would, so the worst case is a sparse tree.
pub struct Document {
    html: Html,
}

/// Parses sanitized HTML into a traversable document
///
/// Scripting is off, so `<noscript>` content is parsed as markup rather
/// than raw text.
pub fn parse(html: &str) -> Document {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let html = driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html);
    if !html.errors.is_empty() {
        ::log::trace!("HTML parser recovered from {} errors", html.errors.len());
    }
    Document { html }
}

impl Document {
    /// All elements with the given tag name, case-insensitive, in document order
    pub fn find_by_tag_name(&self, name: &str) -> Vec<ElementRef<'_>> {
        self.elements()
            .filter(|el| el.value().name().eq_ignore_ascii_case(name))
            .collect()
    }

    /// All elements carrying `attr`, in document order
    ///
    /// With `value` set, only elements whose attribute equals it exactly are
    /// returned; otherwise any element with the attribute matches.
    pub fn find_by_attribute(&self, attr: &str, value: Option<&str>) -> Vec<ElementRef<'_>> {
        // HTML attribute names are lowercased by the tokenizer
        let attr = attr.to_ascii_lowercase();
        self.elements()
            .filter(|el| match el.value().attr(&attr) {
                Some(found) => value.is_none_or(|wanted| found == wanted),
                None => false,
            })
            .collect()
    }

    /// First element with the given tag name
    pub fn first_by_tag_name(&self, name: &str) -> Option<ElementRef<'_>> {
        self.elements()
            .find(|el| el.value().name().eq_ignore_ascii_case(name))
    }

    // Depth-first pre-order walk over every element node
    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }
}

/// Concatenation of every descendant text node, with no separators
pub fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
