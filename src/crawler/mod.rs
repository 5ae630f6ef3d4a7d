//! Crawl control: fetching, pagination discovery, and orchestration
//!
//! The walk over search results and the per-series fetches run one at a
//! time on the caller's task; the only suspension points are the network
//! round trips and the politeness pauses between them.

mod coordinator;
mod fetcher;
mod pagination;
mod walker;

pub use coordinator::Noveldex;
pub use fetcher::{build_http_client, fetch_search_page, fetch_series_page, SearchFetch};
pub use pagination::discover_pages;
pub use walker::collect_result_links;
