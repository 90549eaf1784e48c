use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::document::Element;

lazy_static! {
    static ref OPEN_TAG_RE: Regex = Regex::new(
        r#"<([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s/>=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*)\s*(/?)>"#
    )
    .expect("open tag regex");
    static ref ANY_TAG_RE: Regex =
        Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9-]*)(?:\s+(?:"[^"]*"|'[^']*'|[^"'>])*?)?\s*(/?)>"#)
            .expect("any tag regex");
    static ref ATTR_RE: Regex =
        Regex::new(r#"([^\s/>=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
            .expect("attribute regex");
    static ref COMMENT_RE: Regex = Regex::new(r"(?s)<!--.*?-->").expect("comment regex");
}

const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Every element with an inner span, in document order.
///
/// Void and self-closing elements, elements inside comments and elements
/// without a matching closing tag are left out.
pub(crate) fn elements(src: &str) -> Vec<Element> {
    let comments: Vec<Range<usize>> = COMMENT_RE.find_iter(src).map(|m| m.range()).collect();
    let in_comment = |pos: usize| comments.iter().any(|c| c.contains(&pos));

    let mut out: Vec<Element> = Vec::new();
    for caps in OPEN_TAG_RE.captures_iter(src) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        if in_comment(whole.start()) {
            continue;
        }
        let tag: String = caps[1].to_ascii_lowercase();
        let self_closing: bool = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
        if self_closing || VOID_TAGS.contains(&tag.as_str()) {
            continue;
        }

        let inner_start: usize = whole.end();
        let inner_end: usize = match closing_tag_start(src, &tag, inner_start, &in_comment) {
            Some(v) => v,
            None => continue,
        };

        let attrs: &str = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let (id, classes) = id_and_classes(attrs);
        out.push(Element {
            tag,
            id,
            classes,
            inner: inner_start..inner_end,
        });
    }
    out
}

// Start offset of the closing tag matching an element opened just before `from`.
fn closing_tag_start(
    src: &str,
    tag: &str,
    from: usize,
    in_comment: &impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut depth: usize = 1;
    for caps in ANY_TAG_RE.captures_iter(&src[from..]) {
        let whole = caps.get(0)?;
        let pos: usize = from + whole.start();
        if in_comment(pos) || !caps[2].eq_ignore_ascii_case(tag) {
            continue;
        }
        let closing: bool = !caps[1].is_empty();
        let self_closing: bool = !caps[3].is_empty();
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(pos);
            }
        } else if !self_closing {
            depth += 1;
        }
    }
    None
}

fn id_and_classes(attrs: &str) -> (Option<String>, Vec<String>) {
    let mut id: Option<String> = None;
    let mut classes: Vec<String> = Vec::new();
    for caps in ATTR_RE.captures_iter(attrs) {
        let name: &str = &caps[1];
        let value: &str = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or("");
        if name.eq_ignore_ascii_case("id") && id.is_none() {
            id = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("class") && classes.is_empty() {
            classes = value.split_ascii_whitespace().map(str::to_string).collect();
        }
    }
    (id, classes)
}

/// Escapes text for use as element content.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out: String = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
