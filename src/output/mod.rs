//! Human-readable rendering of search results

mod format;

pub use format::{format_novel, format_results};
