//! View models for the list and detail pages

use crate::types::{BookDetail, BookSummary, LookupTable};
use ego_tree::NodeRef;
use scraper::{Html, Node};
use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Elements that start a new paragraph of description text
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "li", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

/// A card in the book grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookCard {
    pub id: i64,
    pub title: String,
    /// Shown as a tooltip; `None` when the book has no subtitle
    pub subtitle: Option<String>,
    pub pages: Option<u32>,
    /// e.g. `2nd Edition`, only for editions after the first
    pub edition_label: Option<String>,
    /// e.g. `May 2022`
    pub published: Option<String>,
    /// e.g. `52.9 Mb`
    pub file_size: Option<String>,
    pub file_types: Vec<String>,
    pub cover_url: Option<String>,
    pub href: String,
}

impl BookCard {
    /// Build a card, resolving file type ids through `file_types`.
    ///
    /// `cover_url` maps `(publisher, cover_file_name)` to an image URL and is only
    /// called when the book has both.
    pub fn new<F>(book: &BookSummary, file_types: &LookupTable, cover_url: F) -> Self
    where
        F: Fn(&str, &str) -> String,
    {
        Self {
            id: book.id,
            title: book.title.clone(),
            subtitle: book.subtitle.clone().filter(|s| !s.is_empty()),
            pages: book.pages,
            edition_label: book
                .edition
                .filter(|e| *e > 1)
                .map(|e| format!("{} Edition", ordinal(e))),
            published: book.pub_date.map(|d| d.format("%b %Y").to_string()),
            file_size: book.book_file_size.map(|b| format_megabytes(b, 1)),
            file_types: file_types.resolve(&book.file_type_ids),
            cover_url: cover(book, cover_url),
            href: format!("/book/{}", book.id),
        }
    }
}

/// Everything the detail page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookDetailView {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub authors: String,
    pub categories: Vec<String>,
    pub publisher: Option<String>,
    /// `YYYY-MM-DD`
    pub published: Option<String>,
    pub edition: Option<u32>,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
    pub asin: Option<String>,
    pub pages: Option<u32>,
    /// e.g. `52.86 Mb`
    pub file_size: Option<String>,
    pub file_types: String,
    pub cover_url: Option<String>,
    pub download_url: String,
    /// Description reduced to plain-text paragraphs
    pub description: Vec<String>,
}

impl BookDetailView {
    pub fn new<F>(book: &BookDetail, cover_url: F, download_url: String) -> Self
    where
        F: Fn(&str, &str) -> String,
    {
        Self {
            id: book.id,
            title: book.title.clone(),
            subtitle: book.subtitle.clone().unwrap_or_default(),
            authors: book.authors.join(", "),
            categories: book.categories.clone(),
            publisher: book.publisher.clone(),
            published: book.pub_date.map(|d| d.format("%Y-%m-%d").to_string()),
            edition: book.edition,
            isbn10: book.isbn10.clone(),
            isbn13: book.isbn13.map(|n| n.to_string()),
            asin: book.asin.clone(),
            pages: book.pages,
            file_size: book.book_file_size.map(|b| format_megabytes(b, 2)),
            file_types: book.file_types.join(", "),
            cover_url: cover(&book.summary, cover_url),
            download_url,
            description: book
                .description
                .as_deref()
                .map(description_paragraphs)
                .unwrap_or_default(),
        }
    }
}

fn cover<F>(book: &BookSummary, cover_url: F) -> Option<String>
where
    F: Fn(&str, &str) -> String,
{
    match (&book.publisher, &book.cover_file_name) {
        (Some(publisher), Some(file)) if !file.is_empty() => Some(cover_url(publisher, file)),
        _ => None,
    }
}

/// English ordinal: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Bytes as mebibytes with `decimals` places and a ` Mb` suffix
pub fn format_megabytes(bytes: u64, decimals: usize) -> String {
    format!("{:.*} Mb", decimals, bytes as f64 / BYTES_PER_MB)
}

/// Plain-text paragraphs of an HTML fragment.
///
/// Every block element and `<br>` ends the current paragraph; text between
/// blocks forms paragraphs of its own. Script and style contents are dropped.
pub fn description_paragraphs(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    collect_paragraphs(*fragment.root_element(), &mut current, &mut paragraphs);
    end_paragraph(&mut current, &mut paragraphs);
    paragraphs
}

fn collect_paragraphs(node: NodeRef<'_, Node>, current: &mut String, paragraphs: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => current.push_str(text),
            Node::Element(element) => match element.name() {
                "script" | "style" | "template" => {}
                "br" | "hr" => end_paragraph(current, paragraphs),
                name if BLOCK_ELEMENTS.contains(&name) => {
                    end_paragraph(current, paragraphs);
                    collect_paragraphs(child, current, paragraphs);
                    end_paragraph(current, paragraphs);
                }
                _ => collect_paragraphs(child, current, paragraphs),
            },
            _ => {}
        }
    }
}

fn end_paragraph(current: &mut String, paragraphs: &mut Vec<String>) {
    let text = collapse_whitespace(current);
    if !text.is_empty() {
        paragraphs.push(text);
    }
    current.clear();
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
