//! Typed client for the library service
//!
//! [`ApiClient`] talks HTTP; [`Catalog`] is the seam the front-ends depend on so
//! handlers can be exercised against in-memory fakes.

mod client;
mod lookup;
mod query;

pub use client::ApiClient;
pub use lookup::{collect_lookup, FILE_TYPE_PAGE_SIZE, PUBLISHER_PAGE_SIZE};
pub use query::{BookQuery, FIRST_PAGE};

use crate::error::Result;
use crate::types::{BookDetail, BookSummary, LookupTable, ResponsePage};
use async_trait::async_trait;

/// Read-only view of the remote catalog
#[async_trait]
pub trait Catalog: Send + Sync {
    /// One page of books matching `query`
    async fn list_books(&self, query: &BookQuery) -> Result<ResponsePage<BookSummary>>;

    /// A single book with resolved relations
    async fn get_book(&self, id: i64) -> Result<BookDetail>;

    /// Every file type, merged across pages
    async fn file_types(&self) -> Result<LookupTable>;

    /// Every publisher, merged across pages
    async fn publishers(&self) -> Result<LookupTable>;

    /// Public URL of a cover image
    fn cover_url(&self, publisher: &str, cover_file_name: &str) -> String;

    /// Public URL the book file can be downloaded from
    fn download_url(&self, id: i64) -> String;
}
