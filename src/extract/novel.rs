use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Metadata extracted from one series page
///
/// Constructed in a single pass by [`parse_novel`](super::parse_novel) and
/// never mutated afterwards. Every field except `link` comes from the page
/// markup; when the page does not carry a field it is `None`, empty, or
/// `false` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Novel {
    /// Series title; absent on malformed pages
    pub title: Option<String>,

    /// Alternative names, in page order
    pub aliases: Vec<String>,

    /// Category tag such as "Web Novel"
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Raw vote-aggregate text, not parsed to a number
    pub rating: Option<String>,

    pub year: Option<String>,

    /// Deduplicated author names
    pub authors: BTreeSet<String>,

    pub artists: Option<String>,

    pub tags: Vec<String>,

    pub genre: Vec<String>,

    pub language: Option<String>,

    pub publisher: Option<String>,

    pub english_publisher: Option<String>,

    /// Description fragments joined with single spaces
    pub description: String,

    /// `Some(true)` only when the page says exactly "Yes"
    pub licensed: Option<bool>,

    pub novel_status: Option<String>,

    /// Whether the translation-status cell carries the completion mark
    pub completely_translated: bool,

    /// Cover image URL; `None` when the site serves its placeholder image
    pub cover: Option<String>,

    /// URL this record was fetched from; always present
    pub link: String,
}
