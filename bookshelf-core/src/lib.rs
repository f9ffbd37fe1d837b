//! Bookshelf Core Library
//!
//! This crate provides the types and client logic shared by the Bookshelf front-ends.
//! All catalog data lives in a remote library service; this crate knows how to ask
//! for it, how to merge paginated lookup tables, and how to turn the responses into
//! view models.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;
pub mod view;

pub use api::{ApiClient, BookQuery, Catalog};
pub use catalog::{CatalogState, PageLink, RouteParams, SearchFilters};
pub use config::Config;
pub use error::{BookshelfError, ConfigError, Notice, Result};
pub use types::{
    ApiErrors, BookDetail, BookSummary, DataEnvelope, FieldError, FileType, LookupItem,
    LookupTable, Publisher, ResponsePage, SortOrder,
};
pub use view::{BookCard, BookDetailView};

pub use reqwest::StatusCode;
