//! HTTP fetch layer
//!
//! One GET per call, no retries. Search-page fetches and series-page
//! fetches fail differently on a non-success status: an exhausted results
//! listing is an expected end-of-pagination signal, while a dead series
//! link taken verbatim from a listing is an unrecoverable inconsistency.

use std::time::Duration;

use reqwest::Client;

use crate::config::SiteConfig;
use crate::{NoveldexError, Result};

/// Outcome of a results-page fetch
#[derive(Debug)]
pub enum SearchFetch {
    /// Body of a page returned with a success status
    Page(String),

    /// Non-success status; the walker treats this as "no more pages"
    Unavailable { status: u16 },
}

/// Builds the shared HTTP client used for a whole crawl
pub fn build_http_client(site: &SiteConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(site.user_agent.clone())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page of search results for `term`.
///
/// # Returns
///
/// * `Ok(SearchFetch::Page)` - Body of the results page
/// * `Ok(SearchFetch::Unavailable)` - Non-success status; not an error,
///   the listing simply has nothing more to offer
/// * `Err(NoveldexError::Http)` - Transport-level failure
pub async fn fetch_search_page(
    client: &Client,
    site: &SiteConfig,
    term: &str,
    page: u32,
) -> Result<SearchFetch> {
    let url = site.base_url.join(&format!("page/{page}/"))?;

    let response = client
        .get(url.clone())
        .query(&[("s", term), ("post_type", "seriesplan")])
        .send()
        .await
        .map_err(|source| NoveldexError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Ok(SearchFetch::Unavailable {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| NoveldexError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(SearchFetch::Page(body))
}

/// Fetches one series page from a URL discovered on a results page.
///
/// A non-success status is fatal here: the link came from the site
/// itself, so a broken one aborts the crawl.
pub async fn fetch_series_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| NoveldexError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(NoveldexError::SeriesPage {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| NoveldexError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let site = SiteConfig::default();
        assert!(build_http_client(&site).is_ok());
    }

    #[test]
    fn test_search_page_url_shape() {
        let site = SiteConfig::default();
        let url = site.base_url.join("page/3/").unwrap();
        assert_eq!(url.as_str(), "https://www.novelupdates.com/page/3/");
    }
}
