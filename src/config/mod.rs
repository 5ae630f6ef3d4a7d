//! Configuration for where searches go and how a crawl behaves

mod types;

pub use types::{ResultCap, SearchOptions, SiteConfig};
