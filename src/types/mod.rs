pub mod day_label;
pub mod document;
pub mod options;
pub mod viewer;
