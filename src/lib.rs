//! Rewrites server-rendered UTC timestamps inside HTML markup into the
//! viewer's local time.
//!
//! Two passes mirror the page lifecycle: [`rewrite::page_ready`] runs once on
//! the initial document, [`rewrite::fragment_loaded`] runs on every fragment
//! inserted later. [`Page`] ties both to a document.

pub mod core;
pub mod rewrite;
pub mod types;

pub use crate::core::format::{
    INVALID_DATE, readable_day, to_local_full, to_local_hm, to_local_hm_day,
};
pub use crate::core::timestamp::parse_utc;
pub use crate::rewrite::{Page, fragment_loaded, page_ready};
pub use crate::types::day_label::DayLabel;
pub use crate::types::document::{Document, Element};
pub use crate::types::options::RewriteOptions;
pub use crate::types::viewer::{Viewer, ViewerZone};
