//! Noveldex: a search client for the Novel Updates catalog
//!
//! This crate drives paginated catalog searches, fetches every matched
//! series page, and extracts a structured [`Novel`] record from its markup,
//! pausing between requests to stay polite to the source site.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;

use thiserror::Error;

/// Main error type for Noveldex operations
#[derive(Debug, Error)]
pub enum NoveldexError {
    #[error("search term must not be empty")]
    EmptyTerm,

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("series page {url} returned HTTP {status}")]
    SeriesPage { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for Noveldex operations
pub type Result<T> = std::result::Result<T, NoveldexError>;

// Re-export commonly used types
pub use config::{ResultCap, SearchOptions, SiteConfig};
pub use crawler::Noveldex;
pub use extract::{parse_novel, Novel};
