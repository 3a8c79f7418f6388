use crate::html::{Attributes, HtmlNode, LeafNode};
use crate::span::Span;

/// Map an inline span to the HTML leaf that renders it.
pub fn span_to_html_node(span: &Span) -> HtmlNode {
    let leaf = match span {
        Span::Text(text) => LeafNode::text(text.as_str()),
        Span::Bold(text) => LeafNode::new(Some("b"), text.as_str()),
        Span::Italic(text) => LeafNode::new(Some("i"), text.as_str()),
        Span::Code(text) => LeafNode::new(Some("code"), text.as_str()),
        Span::Link { text, url } => LeafNode::new(Some("a"), text.as_str())
            .with_attributes(Attributes::from_iter([("href", url.as_str())])),
        Span::Image { alt, url } => LeafNode::new(Some("img"), "").with_attributes(
            Attributes::from_iter([("src", url.as_str()), ("alt", alt.as_str())]),
        ),
    };
    leaf.into()
}

/// Convert a run of spans into HTML children.
pub fn spans_to_html_nodes(spans: &[Span]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_html_node).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_is_untagged() {
        let node = span_to_html_node(&Span::Text("This is a text node".into()));
        assert_eq!(node.tag(), None);
        assert_eq!(node.render().unwrap(), "This is a text node");
    }

    #[test]
    fn styled_text_tags() {
        for (span, tag) in [
            (Span::Bold("x".into()), "b"),
            (Span::Italic("x".into()), "i"),
            (Span::Code("x".into()), "code"),
        ] {
            let node = span_to_html_node(&span);
            assert_eq!(node.tag(), Some(tag));
            assert_eq!(node.render().unwrap(), format!("<{tag}>x</{tag}>"));
        }
    }

    #[test]
    fn link_carries_href() {
        let node = span_to_html_node(&Span::Link {
            text: "This is a link".into(),
            url: "https://www.boot.dev".into(),
        });
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attributes().get("href"), Some("https://www.boot.dev"));
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://www.boot.dev\">This is a link</a>"
        );
    }

    #[test]
    fn image_has_empty_value_and_src_then_alt() {
        let node = span_to_html_node(&Span::Image {
            alt: "alt".into(),
            url: "u".into(),
        });
        assert_eq!(
            node,
            HtmlNode::Leaf(
                LeafNode::new(Some("img"), "")
                    .with_attributes(Attributes::from_iter([("src", "u"), ("alt", "alt")]))
            )
        );
        assert_eq!(node.render().unwrap(), "<img src=\"u\" alt=\"alt\"></img>");
    }
}
