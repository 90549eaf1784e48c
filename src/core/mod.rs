pub mod format;
pub mod scan;
pub mod timestamp;
