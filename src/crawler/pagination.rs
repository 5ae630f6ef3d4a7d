//! Discovery of additional results pages
//!
//! Decides, from the first results page alone, which further page numbers
//! a walk should visit. Page 1 is never part of the answer; the caller
//! has already fetched it.

use scraper::{ElementRef, Html, Selector};

use crate::config::ResultCap;

/// Caps at or above this are assumed to be satisfied by the first
/// results page, so discovery is skipped entirely.
const FIRST_PAGE_SUFFICIENT: usize = 17;

/// Nominal number of results listed per page, used to bound over-fetching
const RESULTS_PER_PAGE: usize = 10;

/// Returns the additional page numbers to visit, in ascending order.
///
/// Scans the pagination control of the first page for numeric labels and
/// walks up to the highest one found. For capped searches the tail is
/// dropped while fetching it would more than double the requested result
/// count; the walk never shrinks below page 1.
pub fn discover_pages(cap: ResultCap, first_page: &Html) -> Vec<u32> {
    if let Some(limit) = cap.limit() {
        if limit >= FIRST_PAGE_SUFFICIENT {
            return Vec::new();
        }
    }

    let Ok(link_selector) = Selector::parse("a.page-numbers") else {
        return Vec::new();
    };
    let Ok(span_selector) = Selector::parse("span") else {
        return Vec::new();
    };

    let labels: Vec<u32> = first_page
        .select(&link_selector)
        .filter_map(|link| numeric_label(link.select(&span_selector).next()?))
        .collect();

    let Some(mut max_page) = labels.into_iter().max() else {
        return Vec::new();
    };

    if let Some(limit) = cap.limit() {
        while max_page > 1 && (max_page as usize) * RESULTS_PER_PAGE > 2 * limit {
            max_page -= 1;
        }
    }

    (2..=max_page).collect()
}

/// Parses an all-digits pagination label
fn numeric_label(el: ElementRef) -> Option<u32> {
    let text: String = el.text().collect();
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Results page whose pagination control lists the given labels
    fn page_with_labels(labels: &[&str]) -> Html {
        let links: String = labels
            .iter()
            .map(|label| format!(r##"<a class="page-numbers" href="#"><span>{label}</span></a>"##))
            .collect();
        Html::parse_document(&format!("<html><body><div>{links}</div></body></html>"))
    }

    #[test]
    fn test_large_cap_skips_discovery() {
        let page = page_with_labels(&["1", "2", "3", "4", "5"]);
        assert!(discover_pages(ResultCap::Capped(17), &page).is_empty());
        assert!(discover_pages(ResultCap::Capped(100), &page).is_empty());
    }

    #[test]
    fn test_unlimited_walks_to_highest_label() {
        let page = page_with_labels(&["1", "2", "5", "3"]);
        assert_eq!(discover_pages(ResultCap::Unlimited, &page), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_no_pagination_control_means_no_extra_pages() {
        let page = Html::parse_document("<html><body></body></html>");
        assert!(discover_pages(ResultCap::Unlimited, &page).is_empty());
    }

    #[test]
    fn test_non_numeric_labels_mean_no_extra_pages() {
        let page = page_with_labels(&["Next", "Last"]);
        assert!(discover_pages(ResultCap::Unlimited, &page).is_empty());
    }

    #[test]
    fn test_mixed_labels_ignore_non_numeric() {
        let page = page_with_labels(&["1", "2", "3", "Next"]);
        assert_eq!(discover_pages(ResultCap::Unlimited, &page), vec![2, 3]);
    }

    #[test]
    fn test_small_cap_shrinks_the_walk() {
        let page = page_with_labels(&["1", "2", "3", "4", "5"]);
        // Thirteen requested results tolerate up to two full pages.
        assert_eq!(discover_pages(ResultCap::Capped(13), &page), vec![2]);
        // Sixteen tolerate three.
        assert_eq!(discover_pages(ResultCap::Capped(16), &page), vec![2, 3]);
    }

    #[test]
    fn test_tiny_cap_never_shrinks_below_page_one() {
        let page = page_with_labels(&["1", "2", "3", "4", "5"]);
        assert!(discover_pages(ResultCap::Capped(1), &page).is_empty());
        assert!(discover_pages(ResultCap::Capped(3), &page).is_empty());
    }

    #[test]
    fn test_page_one_is_never_returned() {
        let page = page_with_labels(&["1"]);
        assert!(discover_pages(ResultCap::Unlimited, &page).is_empty());

        let page = page_with_labels(&["1", "2", "9"]);
        let pages = discover_pages(ResultCap::Unlimited, &page);
        assert!(!pages.contains(&1));
        assert!(pages.iter().all(|&p| p <= 9));
    }
}
