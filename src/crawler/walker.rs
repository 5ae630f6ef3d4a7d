//! Throttled walk across paginated search results
//!
//! Fetches results pages in ascending order, accumulating series-page
//! links and pausing every few fetches to stay polite.

use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::{ResultCap, SearchOptions, SiteConfig};
use crate::crawler::fetcher::{fetch_search_page, SearchFetch};
use crate::crawler::pagination::discover_pages;
use crate::Result;

/// Collects series-page URLs matching `term`, in discovery order.
///
/// An unavailable first page yields an empty list; an unavailable later
/// page ends the walk early with whatever was collected so far. The
/// result cap applies to each page on its own, so a multi-page walk can
/// return more links than the cap in total.
pub async fn collect_result_links(
    client: &Client,
    site: &SiteConfig,
    term: &str,
    options: &SearchOptions,
) -> Result<Vec<String>> {
    let cap = options.result_cap();
    let interval = options.normalized_interval();

    let body = match fetch_search_page(client, site, term, 1).await? {
        SearchFetch::Page(body) => body,
        SearchFetch::Unavailable { status } => {
            tracing::debug!("first results page for {term:?} unavailable (HTTP {status})");
            return Ok(Vec::new());
        }
    };

    // Parsed documents stay inside this block so no `Html` value lives
    // across an await point.
    let (mut links, pages) = {
        let doc = Html::parse_document(&body);
        (result_links(&doc, cap), discover_pages(cap, &doc))
    };
    tracing::debug!(
        "page 1 for {term:?} yielded {} links, {} more pages to visit",
        links.len(),
        pages.len()
    );

    let mut fetched = 0u32;
    for page in pages {
        fetched += 1;

        let body = match fetch_search_page(client, site, term, page).await? {
            SearchFetch::Page(body) => body,
            SearchFetch::Unavailable { status } => {
                tracing::debug!("results page {page} unavailable (HTTP {status}), ending walk");
                break;
            }
        };

        let page_links = {
            let doc = Html::parse_document(&body);
            result_links(&doc, cap)
        };
        tracing::debug!("page {page} yielded {} links", page_links.len());
        links.extend(page_links);

        if fetched % interval == 0 {
            tokio::time::sleep(options.sleep_duration()).await;
        }
    }

    Ok(links)
}

/// Series links on one results page, truncated to the cap
fn result_links(doc: &Html, cap: ResultCap) -> Vec<String> {
    let Ok(selector) = Selector::parse("a.w-blog-entry-link") else {
        return Vec::new();
    };

    let mut links: Vec<String> = doc
        .select(&selector)
        .filter_map(|link| link.value().attr("href"))
        .map(str::to_string)
        .collect();

    if let Some(limit) = cap.limit() {
        links.truncate(limit);
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_page(hrefs: &[&str]) -> Html {
        let links: String = hrefs
            .iter()
            .map(|href| format!(r#"<a class="w-blog-entry-link" href="{href}">entry</a>"#))
            .collect();
        Html::parse_document(&format!("<html><body>{links}</body></html>"))
    }

    #[test]
    fn test_result_links_in_document_order() {
        let doc = results_page(&["https://a.example/1", "https://a.example/2"]);
        assert_eq!(
            result_links(&doc, ResultCap::Unlimited),
            vec!["https://a.example/1", "https://a.example/2"]
        );
    }

    #[test]
    fn test_result_links_truncated_to_cap() {
        let doc = results_page(&["https://a.example/1", "https://a.example/2", "https://a.example/3"]);
        assert_eq!(
            result_links(&doc, ResultCap::Capped(2)),
            vec!["https://a.example/1", "https://a.example/2"]
        );
    }

    #[test]
    fn test_links_without_href_are_skipped() {
        let doc = Html::parse_document(
            r#"<html><body>
            <a class="w-blog-entry-link">no href</a>
            <a class="w-blog-entry-link" href="https://a.example/1">entry</a>
            </body></html>"#,
        );
        assert_eq!(
            result_links(&doc, ResultCap::Unlimited),
            vec!["https://a.example/1"]
        );
    }
}
