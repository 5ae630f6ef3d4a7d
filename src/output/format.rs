//! Plain-text rendering of [`Novel`] records

use std::collections::BTreeSet;

use crate::extract::Novel;

/// Renders one record as a labeled field listing
pub fn format_novel(novel: &Novel) -> String {
    format!(
        "{title}\n\
         Aliases: {aliases}\n\
         Type: {kind}\n\
         Rating: {rating}\n\
         Year: {year}\n\
         Authors: {authors}\n\
         Tags: {tags}\n\
         Genre: {genre}\n\
         Language: {language}\n\
         Publisher: {publisher}\n\
         English Publisher: {english_publisher}\n\
         Description:\n\
         {description}\n\
         \n\
         Licensed: {licensed}\n\
         Novel Status: {novel_status}\n\
         Completely Translated: {completely_translated}\n\
         Cover: {cover}\n\
         Artists: {artists}\n\
         Link: {link}\n",
        title = opt(&novel.title),
        aliases = list(&novel.aliases),
        kind = opt(&novel.kind),
        rating = opt(&novel.rating),
        year = opt(&novel.year),
        authors = set(&novel.authors),
        tags = list(&novel.tags),
        genre = list(&novel.genre),
        language = opt(&novel.language),
        publisher = opt(&novel.publisher),
        english_publisher = opt(&novel.english_publisher),
        description = novel.description,
        licensed = tristate(novel.licensed),
        novel_status = opt(&novel.novel_status),
        completely_translated = yes_no(novel.completely_translated),
        cover = opt(&novel.cover),
        artists = opt(&novel.artists),
        link = novel.link,
    )
}

/// Renders a whole result sequence as a numbered listing
pub fn format_results(results: &[Novel]) -> String {
    let mut out = String::from("Results:\n");
    for (index, novel) in results.iter().enumerate() {
        out.push_str(&format!("{}. {}", index + 1, format_novel(novel)));
    }
    out
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn list(values: &[String]) -> String {
    values.join(", ")
}

fn set(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn tristate(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "-",
    }
}
