//! Book records as served by `/v1/books`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book as it appears in a listing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSummary {
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub isbn10: Option<String>,

    /// Sent as a bare number
    #[serde(default)]
    pub isbn13: Option<u64>,

    #[serde(default)]
    pub asin: Option<String>,

    #[serde(default)]
    pub pages: Option<u32>,

    #[serde(default)]
    pub edition: Option<u32>,

    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,

    /// Size of the book file in bytes
    #[serde(default)]
    pub book_file_size: Option<u64>,

    #[serde(default)]
    pub cover_file_name: Option<String>,

    #[serde(default)]
    pub publisher: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub author_ids: Vec<i64>,

    #[serde(default)]
    pub category_ids: Vec<i64>,

    #[serde(default)]
    pub file_type_ids: Vec<i64>,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// A single book with its relations already resolved to names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDetail {
    #[serde(flatten)]
    pub summary: BookSummary,

    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub file_types: Vec<String>,

    /// HTML fragment
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl std::ops::Deref for BookDetail {
    type Target = BookSummary;

    fn deref(&self) -> &Self::Target {
        &self.summary
    }
}
