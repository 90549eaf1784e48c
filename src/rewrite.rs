use crate::core::format;
use crate::types::document::{Document, Element};
use crate::types::options::RewriteOptions;

/// Page-ready pass.
///
/// Rewrites every element carrying `options.full_class` to the full local
/// date/time (`Thu May 27 2021 23:59:00`) and fills the element with id
/// `options.tz_element_id`, when present, with the viewer's zone label.
/// Unparsable text becomes `Invalid Date`.
pub fn page_ready(doc: &mut Document, options: &RewriteOptions) {
    let viewer = &options.viewer;
    let replacements: Vec<(Element, String)> = doc
        .elements_by_class(&options.full_class)
        .into_iter()
        .map(|el| {
            let text: String = format::full_from_text(doc.inner_text(&el), viewer);
            (el, text)
        })
        .collect();
    log::debug!(
        "page ready: {} '{}' element(s)",
        replacements.len(),
        options.full_class
    );
    doc.replace_texts(replacements);

    if let Some(tz) = doc.element_by_id(&options.tz_element_id) {
        doc.replace_texts(vec![(tz, viewer.zone_label.clone())]);
    }
}

/// Fragment-load pass.
///
/// Rewrites `options.hm_class` elements to `HH:MM` and then
/// `options.hm_day_class` elements to `HH:MM <day>`. Text that was already
/// converted is not recognized; running the pass twice yields `Invalid Date`.
pub fn fragment_loaded(fragment: &mut Document, options: &RewriteOptions) {
    rewrite_class(fragment, &options.hm_class, |text| {
        format::hm_from_text(text, &options.viewer)
    });
    rewrite_class(fragment, &options.hm_day_class, |text| {
        format::hm_day_from_text(text, &options.viewer)
    });
}

fn rewrite_class(doc: &mut Document, class: &str, render: impl Fn(&str) -> String) {
    let replacements: Vec<(Element, String)> = doc
        .elements_by_class(class)
        .into_iter()
        .map(|el| {
            let text: String = render(doc.inner_text(&el));
            (el, text)
        })
        .collect();
    log::debug!("fragment load: {} '{}' element(s)", replacements.len(), class);
    doc.replace_texts(replacements);
}

/// A document plus the options its hooks run with.
///
/// The host calls `ready` once after the initial render and `swap_inner`
/// for every fragment it inserts.
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    options: RewriteOptions,
}

impl Page {
    pub fn new(html: impl Into<String>, options: RewriteOptions) -> Self {
        Self {
            document: Document::new(html),
            options,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Initial render: the page-ready pass, then the fragment-load pass over
    /// the whole body.
    pub fn ready(&mut self) {
        page_ready(&mut self.document, &self.options);
        fragment_loaded(&mut self.document, &self.options);
    }

    /// Converts `fragment_html` and makes it the inner markup of the element
    /// with id `target_id`.
    ///
    /// Returns `false`, leaving the page untouched, when no such element
    /// exists.
    pub fn swap_inner(&mut self, target_id: &str, fragment_html: &str) -> bool {
        let target: Element = match self.document.element_by_id(target_id) {
            Some(el) => el,
            None => {
                log::warn!("swap target '#{}' not found", target_id);
                return false;
            }
        };
        let mut fragment: Document = Document::new(fragment_html);
        fragment_loaded(&mut fragment, &self.options);
        self.document
            .replace_inner_html(vec![(target, fragment.into_string())]);
        true
    }

    pub fn into_html(self) -> String {
        self.document.into_string()
    }
}
