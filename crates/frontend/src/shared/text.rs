//! Plain-text and markup helpers for the rich text fields.
//!
//! Records store formatted answers as markup strings. Search matches against
//! the text with tag delimiters removed; rendering goes through a
//! conservative allowlist filter before being handed to `inner_html`.

/// Tags allowed through [`sanitize_markup`]. Attributes are always dropped.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "b", "strong", "i", "em", "u", "s", "h1", "h2", "h3", "ul", "ol", "li",
    "blockquote", "pre", "code", "span", "a",
];

/// Replace each `<...>` tag run with a single space, without interpreting
/// the markup. Unterminated delimiters are kept as literal text.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            // `<[^>]+>` semantics: the run must be non-empty
            Some(close) if close > 0 => {
                out.push(' ');
                rest = &after[close + 1..];
            }
            Some(_) => {
                out.push_str("<>");
                rest = &after[1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Filter markup down to a tag allowlist before `inner_html` rendering.
///
/// All attributes are dropped, unknown tags are removed, and the entire
/// content of `script`/`style` elements is discarded. No markup is ever
/// executed or interpreted beyond this filtering.
pub fn sanitize_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            // unterminated delimiter: neutralize it
            out.push_str("&lt;");
            rest = after;
            continue;
        };
        let raw = &after[..close];
        rest = &after[close + 1..];

        let (closing, body) = match raw.strip_prefix('/') {
            Some(b) => (true, b),
            None => (false, raw),
        };
        let name: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        if ALLOWED_TAGS.contains(&name.as_str()) {
            if closing {
                out.push_str(&format!("</{}>", name));
            } else {
                out.push_str(&format!("<{}>", name));
            }
        } else if !closing && (name == "script" || name == "style") {
            // drop the element together with its content
            let end_tag = format!("</{}", name);
            if let Some(pos) = rest.to_ascii_lowercase().find(&end_tag) {
                let tail = &rest[pos..];
                rest = match tail.find('>') {
                    Some(p) => &tail[p + 1..],
                    None => "",
                };
            } else {
                rest = "";
            }
        }
        // any other tag: silently dropped
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_replaces_tags_with_spaces() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), " Hello  world  ");
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn strip_keeps_unterminated_delimiters() {
        assert_eq!(strip_tags("a < b"), "a < b");
        assert_eq!(strip_tags("x <> y"), "x <> y");
    }

    #[test]
    fn sanitize_keeps_allowlisted_tags_only() {
        assert_eq!(
            sanitize_markup("<p>an <b>answer</b></p>"),
            "<p>an <b>answer</b></p>"
        );
        assert_eq!(sanitize_markup("<video>x</video>"), "x");
    }

    #[test]
    fn sanitize_drops_attributes() {
        assert_eq!(
            sanitize_markup(r#"<b onclick="evil()">ok</b>"#),
            "<b>ok</b>"
        );
        assert_eq!(
            sanitize_markup(r#"<a href="javascript:evil()">link</a>"#),
            "<a>link</a>"
        );
    }

    #[test]
    fn sanitize_removes_script_with_content() {
        assert_eq!(
            sanitize_markup("before<script>alert(1)</script>after"),
            "beforeafter"
        );
        assert_eq!(sanitize_markup("<style>p{}</style>x"), "x");
        // unterminated script swallows the rest rather than leaking it
        assert_eq!(sanitize_markup("a<script>alert(1)"), "a");
    }
}
