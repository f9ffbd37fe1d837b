//! Sort orders accepted by `/v1/books`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Book list ordering, sent as `<field>,<direction>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    IdAsc,
    IdDesc,
    TitleAsc,
    TitleDesc,
    SubtitleAsc,
    SubtitleDesc,
    CreatedAtAsc,
    CreatedAtDesc,
    UpdatedAtAsc,
    #[default]
    UpdatedAtDesc,
    PubDateAsc,
    PubDateDesc,
}

impl SortOrder {
    /// Every ordering, in the order the sort menu lists them
    pub const ALL: [SortOrder; 12] = [
        SortOrder::IdAsc,
        SortOrder::IdDesc,
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::SubtitleAsc,
        SortOrder::SubtitleDesc,
        SortOrder::CreatedAtAsc,
        SortOrder::CreatedAtDesc,
        SortOrder::UpdatedAtAsc,
        SortOrder::UpdatedAtDesc,
        SortOrder::PubDateAsc,
        SortOrder::PubDateDesc,
    ];

    /// Ordering used for every lookup endpoint
    pub const LOOKUP: &'static str = "name,asc";

    /// Value for the `sort` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            SortOrder::IdAsc => "id,asc",
            SortOrder::IdDesc => "id,desc",
            SortOrder::TitleAsc => "title,asc",
            SortOrder::TitleDesc => "title,desc",
            SortOrder::SubtitleAsc => "subtitle,asc",
            SortOrder::SubtitleDesc => "subtitle,desc",
            SortOrder::CreatedAtAsc => "created_at,asc",
            SortOrder::CreatedAtDesc => "created_at,desc",
            SortOrder::UpdatedAtAsc => "updated_at,asc",
            SortOrder::UpdatedAtDesc => "updated_at,desc",
            SortOrder::PubDateAsc => "pub_date,asc",
            SortOrder::PubDateDesc => "pub_date,desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::IdAsc => "Book ID ↓",
            SortOrder::IdDesc => "Book ID ↑",
            SortOrder::TitleAsc => "Title ↓",
            SortOrder::TitleDesc => "Title ↑",
            SortOrder::SubtitleAsc => "Subtitle ↓",
            SortOrder::SubtitleDesc => "Subtitle ↑",
            SortOrder::CreatedAtAsc => "Created ↓",
            SortOrder::CreatedAtDesc => "Created ↑",
            SortOrder::UpdatedAtAsc => "Updated ↓",
            SortOrder::UpdatedAtDesc => "Updated ↑",
            SortOrder::PubDateAsc => "Publication date ↓",
            SortOrder::PubDateDesc => "Publication date ↑",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Returned when a `sort` value names no known ordering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}'")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_query() == normalized)
            .ok_or_else(|| ParseSortOrderError(s.to_string()))
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_query())
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
