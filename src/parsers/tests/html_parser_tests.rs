use crate::parsers::html;

#[cfg(test)]
mod lookup_tests {
    use super::*;

    #[test]
    fn test_find_by_tag_name_is_case_insensitive() {
        let doc = html::parse("<html><body><DIV>a</DIV><div>b</div></body></html>");
        let divs = doc.find_by_tag_name("Div");
        assert_eq!(divs.len(), 2);
        assert_eq!(html::text_content(&divs[0]), "a");
        assert_eq!(html::text_content(&divs[1]), "b");
    }

    #[test]
    fn test_find_by_tag_name_pre_order() {
        let doc = html::parse(
            "<body><section id=\"outer\"><section id=\"inner\"></section></section>\
             <section id=\"sibling\"></section></body>",
        );
        let ids = doc
            .find_by_tag_name("section")
            .iter()
            .filter_map(|el| el.value().attr("id"))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["outer", "inner", "sibling"]);
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 500;
        let markup = format!("{}deep{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let doc = html::parse(&markup);
        let spans = doc.find_by_tag_name("span");
        assert!(!spans.is_empty());
        assert_eq!(html::text_content(&spans[0]), "deep");
    }

    #[test]
    fn test_find_by_attribute_with_value() {
        let doc = html::parse(
            "<head><meta name=\"keywords\" content=\"k\"><meta name=\"description\" content=\"d\"></head>",
        );
        let found = doc.find_by_attribute("name", Some("description"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value().attr("content"), Some("d"));
    }

    #[test]
    fn test_find_by_attribute_exact_match_only() {
        let doc = html::parse(
            "<link rel=\"stylesheet preload\" href=\"a.css\"><link rel=\"Stylesheet\" href=\"b.css\">",
        );
        assert!(doc.find_by_attribute("rel", Some("stylesheet")).is_empty());
    }

    #[test]
    fn test_find_by_attribute_presence() {
        let doc = html::parse("<p data-x=\"1\">a</p><p>b</p><span data-x=\"\">c</span>");
        let found = doc.find_by_attribute("DATA-X", None);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value().name(), "p");
        assert_eq!(found[1].value().name(), "span");
    }

    #[test]
    fn test_text_content_concatenates_without_separators() {
        let doc = html::parse("<body><p>Hello</p><p>World</p> <b>!</b></body>");
        let body = doc.first_by_tag_name("body").unwrap();
        assert_eq!(html::text_content(&body), "HelloWorld !");
    }
}

#[cfg(test)]
mod malformed_tests {
    use super::*;

    #[test]
    fn test_unclosed_tags() {
        let doc = html::parse("<html><body><div><p>one<p>two<div>three");
        let paragraphs = doc.find_by_tag_name("p");
        assert_eq!(paragraphs.len(), 2);
        let body = doc.first_by_tag_name("body").unwrap();
        assert_eq!(html::text_content(&body), "onetwothree");
    }

    #[test]
    fn test_garbage_input() {
        let doc = html::parse("<<<>>> </not-open> <a href=\"x\" <b>");
        // The parser always produces the document skeleton
        assert_eq!(doc.find_by_tag_name("html").len(), 1);
        assert_eq!(doc.find_by_tag_name("body").len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let doc = html::parse("");
        assert!(doc.find_by_tag_name("title").is_empty());
        let body = doc.first_by_tag_name("body").unwrap();
        assert_eq!(html::text_content(&body), "");
    }
}
