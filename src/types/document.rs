use std::ops::Range;

use crate::core::scan;

/// An element located in a `Document`.
///
/// `inner` is the byte range between the end of the opening tag and the start
/// of the matching closing tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lower-cased tag name.
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub inner: Range<usize>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// HTML markup that the rewrite passes edit in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    source: String,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    /// Elements listing `class` among their classes, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<Element> {
        scan::elements(&self.source)
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// First element whose `id` equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        scan::elements(&self.source)
            .into_iter()
            .find(|el| el.id.as_deref() == Some(id))
    }

    /// Inner markup of `el`, trimmed.
    pub fn inner_text(&self, el: &Element) -> &str {
        self.source
            .get(el.inner.clone())
            .map(str::trim)
            .unwrap_or("")
    }

    /// Replaces the inner markup of each element with escaped text.
    ///
    /// An element nested inside another listed element is dropped; the outer
    /// one wins.
    pub fn replace_texts(&mut self, replacements: Vec<(Element, String)>) {
        let escaped: Vec<(Element, String)> = replacements
            .into_iter()
            .map(|(el, text)| (el, scan::escape_text(&text)))
            .collect();
        self.replace_inner_html(escaped);
    }

    /// Replaces the inner markup of each element verbatim.
    pub fn replace_inner_html(&mut self, mut replacements: Vec<(Element, String)>) {
        replacements.sort_by_key(|(el, _)| el.inner.start);

        let mut kept: Vec<(Range<usize>, String)> = Vec::with_capacity(replacements.len());
        let mut last_end: usize = 0;
        for (el, html) in replacements {
            if !kept.is_empty() && el.inner.start < last_end {
                continue;
            }
            last_end = el.inner.end;
            kept.push((el.inner, html));
        }

        // back to front so earlier ranges stay valid
        for (range, html) in kept.into_iter().rev() {
            if range.end <= self.source.len() {
                self.source.replace_range(range, &html);
            }
        }
    }
}
