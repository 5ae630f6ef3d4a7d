//! Mapping from series-page markup to a [`Novel`] record
//!
//! Each field has one canonical anchor in the page. An absent anchor
//! yields an empty or `None` field; extraction itself never fails.

use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Node, Selector};

use crate::extract::Novel;

/// Image the site serves when a series has no cover upload
const NO_COVER_URL: &str = "http://www.novelupdates.com/img/noimagefound.jpg";

/// Extracts a [`Novel`] from a fetched series page.
///
/// `link` is the URL the page was fetched from and is copied into the
/// record verbatim; it is never re-derived from the markup.
pub fn parse_novel(html: &str, link: &str) -> Novel {
    let doc = Html::parse_document(html);

    Novel {
        title: text_of(&doc, "h4.seriestitle.new"),
        aliases: fragments_of(&doc, "div#editassociated"),
        kind: text_of(&doc, "a.genre.type"),
        rating: text_of(&doc, ".uvotes"),
        year: text_of(&doc, "div#edityear"),
        authors: authors(&doc),
        artists: text_of(&doc, "a.genre#artiststag"),
        tags: fragments_of(&doc, "div#showtags"),
        genre: fragments_of(&doc, "div#seriesgenre"),
        language: text_of(&doc, "a.genre.lang"),
        publisher: text_of(&doc, "a.genre#myopub"),
        english_publisher: english_publisher(&doc),
        description: fragments_of(&doc, "div#editdescription").join(" "),
        licensed: text_of(&doc, "div#showlicensed").map(|text| text == "Yes"),
        novel_status: text_of(&doc, "div#editstatus"),
        completely_translated: completely_translated(&doc),
        cover: cover(&doc),
        link: link.to_string(),
    }
}

/// First element matching `selector`, if any
fn find<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector).next()
}

/// Trimmed text drawn from the element's immediate text children.
/// Text nested inside child elements is not included.
fn direct_text(el: ElementRef) -> Option<String> {
    let mut text = String::new();
    for child in el.children() {
        if let Node::Text(t) = child.value() {
            text.push_str(&t.text);
        }
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed direct text of the first element matching `selector`
fn text_of(doc: &Html, selector: &str) -> Option<String> {
    find(doc, selector).and_then(direct_text)
}

/// Trimmed, non-empty text of each immediate child of the anchor, in
/// document order. An absent anchor yields an empty list.
fn fragments_of(doc: &Html, selector: &str) -> Vec<String> {
    let Some(el) = find(doc, selector) else {
        return Vec::new();
    };

    el.children()
        .filter_map(|child| {
            let text = match child.value() {
                Node::Text(t) => t.text.to_string(),
                Node::Element(_) => ElementRef::wrap(child)?.text().collect(),
                _ => return None,
            };
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

/// Author names from every `a#authtag` occurrence, deduplicated
fn authors(doc: &Html) -> BTreeSet<String> {
    let Ok(selector) = Selector::parse("a#authtag") else {
        return BTreeSet::new();
    };

    doc.select(&selector).filter_map(direct_text).collect()
}

/// The english-publisher cell appears in two shapes: a plain text label,
/// or a nest of extra markup. The nested shape is kept as the space-joined
/// string form of each child node, elements serialized as markup.
fn english_publisher(doc: &Html) -> Option<String> {
    let el = find(doc, "a.genre#myepub")?;

    let mut children = el.children();
    if let (Some(only), None) = (children.next(), children.next()) {
        if let Node::Text(t) = only.value() {
            let trimmed = t.text.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }

    let joined = el
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(t) => Some(t.text.to_string()),
            Node::Element(_) => ElementRef::wrap(child).map(|e| e.html()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// A completed series renders an extra node (the completion mark) inside
/// the translation-status cell, so anything beyond a single descendant
/// counts as complete. `descendants()` yields the element itself first.
fn completely_translated(doc: &Html) -> bool {
    find(doc, "div#showtranslated")
        .map(|el| el.descendants().skip(1).count() > 1)
        .unwrap_or(false)
}

/// Source of the page's first image, unless it is the placeholder
fn cover(doc: &Html) -> Option<String> {
    let src = find(doc, "img")?.value().attr("src")?;
    (src != NO_COVER_URL).then(|| src.to_string())
}
