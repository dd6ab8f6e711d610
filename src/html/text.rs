use scraper::{ElementRef, Html, Node};

/// Tags that end a line of visible text
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "div",
    "dl",
    "dt",
    "dd",
    "fieldset",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "td",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Render an HTML fragment to plain text.
///
/// Tags and attributes are discarded, block boundaries become newlines, and
/// inline markup keeps its text on the same line. The parser recovers from
/// malformed input, so this never fails; an input with no visible text
/// renders to an empty string.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    render_element(fragment.root_element(), &mut out);

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if name == "script" || name == "style" {
        return;
    }
    if name == "br" {
        out.push('\n');
        return;
    }

    let block = BLOCK_TAGS.contains(&name);
    if block {
        line_break(out);
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    render_element(child_element, out);
                }
            }
            _ => {}
        }
    }
    if block {
        line_break(out);
    }
}

fn line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paragraph() {
        assert_eq!(html_to_text("<p>Hi</p>"), "Hi");
    }

    #[test]
    fn test_inline_markup_stays_on_one_line() {
        assert_eq!(html_to_text("Hello <b>world</b>!"), "Hello world!");
        assert_eq!(
            html_to_text(r#"<a href="https://example.com">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn test_block_boundaries_become_newlines() {
        assert_eq!(
            html_to_text("<p>first</p><p>second</p>"),
            "first\nsecond"
        );
        assert_eq!(
            html_to_text("<div>one</div><div>two</div><div>three</div>"),
            "one\ntwo\nthree"
        );
        assert_eq!(
            html_to_text("<ul><li>a</li><li>b</li></ul>"),
            "a\nb"
        );
    }

    #[test]
    fn test_br_breaks_the_line() {
        assert_eq!(html_to_text("line one<br>line two"), "line one\nline two");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(html_to_text("<p>a &amp; b</p>"), "a & b");
    }

    #[test]
    fn test_script_and_style_are_dropped() {
        assert_eq!(
            html_to_text("<p>kept</p><script>var x = 1;</script><style>p{}</style>"),
            "kept"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_text("no markup here"), "no markup here");
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        assert_eq!(html_to_text("<p>un<closed"), "un");
        assert_eq!(html_to_text("<p><b>nested</p>"), "nested");
    }

    #[test]
    fn test_no_visible_text_renders_empty() {
        assert_eq!(html_to_text(""), "");
        assert_eq!(html_to_text("<div></div>"), "");
        assert_eq!(html_to_text("<p>   </p>"), "");
    }
}
