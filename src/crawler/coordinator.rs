//! Crawl orchestration: the public search entry points

use std::collections::HashMap;

use reqwest::Client;

use crate::config::{SearchOptions, SiteConfig};
use crate::crawler::fetcher::{build_http_client, fetch_series_page};
use crate::crawler::walker::collect_result_links;
use crate::extract::{parse_novel, Novel};
use crate::{NoveldexError, Result};

/// Entry point for catalog searches
///
/// Owns the HTTP client for its whole lifetime. Construct one, run any
/// number of searches against it, and release it with [`close`].
///
/// ```rust,ignore
/// use noveldex::{Noveldex, SearchOptions};
///
/// #[tokio::main]
/// async fn main() -> noveldex::Result<()> {
///     let crawler = Noveldex::new()?;
///     let results = crawler
///         .search("Example", &SearchOptions::new().with_max_results(3))
///         .await?;
///     for novel in &results {
///         println!("{:?}: {}", novel.title, novel.link);
///     }
///     crawler.close();
///     Ok(())
/// }
/// ```
///
/// [`close`]: Noveldex::close
pub struct Noveldex {
    client: Client,
    site: SiteConfig,
}

impl Noveldex {
    /// Creates a crawler against the default catalog site
    pub fn new() -> Result<Self> {
        Self::with_site(SiteConfig::default())
    }

    /// Creates a crawler with its own HTTP client for the given site
    pub fn with_site(site: SiteConfig) -> Result<Self> {
        let client = build_http_client(&site)?;
        Ok(Self { client, site })
    }

    /// Uses a caller-provided client instead of building one
    pub fn with_client(client: Client, site: SiteConfig) -> Self {
        Self { client, site }
    }

    /// Searches the catalog and returns one record per matched series,
    /// in the order the results pages listed them.
    ///
    /// Fetches run one at a time. A politeness pause separates every
    /// `interval`-th series-page fetch while more remain; the results-page
    /// walk applies its own, independent pauses. A broken series link
    /// aborts the whole search with no partial results.
    pub async fn search(&self, term: &str, options: &SearchOptions) -> Result<Vec<Novel>> {
        if term.trim().is_empty() {
            return Err(NoveldexError::EmptyTerm);
        }

        let urls = collect_result_links(&self.client, &self.site, term, options).await?;

        let interval = options.normalized_interval() as usize;
        if urls.len() >= 4 {
            let pauses = urls.len() / interval;
            tracing::info!(
                "parsing {} series pages, pausing {}s every {} fetches (at least {}s of waiting)",
                urls.len(),
                options.sleep_time,
                interval,
                pauses as f64 * options.sleep_time
            );
        }

        let mut results = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            tracing::debug!("fetching series page {url}");
            let body = fetch_series_page(&self.client, url).await?;
            results.push(parse_novel(&body, url));

            let fetched = index + 1;
            if fetched < urls.len() && fetched % interval == 0 {
                tokio::time::sleep(options.sleep_duration()).await;
            }
        }

        Ok(results)
    }

    /// Searches the catalog and keys the records by title.
    ///
    /// Titles are not unique, so a later record silently replaces an
    /// earlier one with the same title; a record with no title keys under
    /// the empty string.
    pub async fn search_mapped(
        &self,
        term: &str,
        options: &SearchOptions,
    ) -> Result<HashMap<String, Novel>> {
        let results = self.search(term, options).await?;

        Ok(results
            .into_iter()
            .map(|novel| (novel.title.clone().unwrap_or_default(), novel))
            .collect())
    }

    /// Releases the HTTP client.
    ///
    /// Taking `self` by value is the drain guarantee: no search can still
    /// be borrowing the client, so every fetch has already completed when
    /// the connection pool drops.
    pub fn close(self) {
        drop(self.client);
    }
}
