use crate::types::viewer::Viewer;

pub const DEFAULT_FULL_CLASS: &str = "toLocalTime";
pub const DEFAULT_HM_CLASS: &str = "toLocalTimeHM";
pub const DEFAULT_HM_DAY_CLASS: &str = "toLocalTimeHMday";
pub const DEFAULT_TZ_ELEMENT_ID: &str = "tz_str";

/// Marker names and viewer clock used by the rewrite passes.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteOptions {
    /// Class of elements rewritten to the full local date/time on page ready.
    pub full_class: String,
    /// Class of elements rewritten to `HH:MM` on fragment load.
    pub hm_class: String,
    /// Class of elements rewritten to `HH:MM <day>` on fragment load.
    pub hm_day_class: String,
    /// Id of the element receiving the viewer's zone label.
    pub tz_element_id: String,
    pub viewer: Viewer,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self::for_viewer(Viewer::local())
    }
}

impl RewriteOptions {
    /// Default marker names with the given viewer.
    pub fn for_viewer(viewer: Viewer) -> Self {
        Self {
            full_class: DEFAULT_FULL_CLASS.to_string(),
            hm_class: DEFAULT_HM_CLASS.to_string(),
            hm_day_class: DEFAULT_HM_DAY_CLASS.to_string(),
            tz_element_id: DEFAULT_TZ_ELEMENT_ID.to_string(),
            viewer,
        }
    }

    pub fn with_full_class(mut self, class: impl Into<String>) -> Self {
        self.full_class = class.into();
        self
    }

    pub fn with_hm_class(mut self, class: impl Into<String>) -> Self {
        self.hm_class = class.into();
        self
    }

    pub fn with_hm_day_class(mut self, class: impl Into<String>) -> Self {
        self.hm_day_class = class.into();
        self
    }

    pub fn with_tz_element_id(mut self, id: impl Into<String>) -> Self {
        self.tz_element_id = id.into();
        self
    }
}
