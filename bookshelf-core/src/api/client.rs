//! HTTP client for the library service

use super::lookup::{collect_lookup, FILE_TYPE_PAGE_SIZE, PUBLISHER_PAGE_SIZE};
use super::query::BookQuery;
use super::Catalog;
use crate::config::{Config, DEFAULT_TIMEOUT_SECS};
use crate::error::{BookshelfError, Result};
use crate::types::{
    BookDetail, BookSummary, DataEnvelope, FileType, LookupTable, Publisher, ResponsePage,
    SortOrder,
};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Client for the `/v1` API of the library service
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8080`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.api_url.clone(), config.timeout)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(BookshelfError::InvalidUrl(base_url));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()?;

        tracing::debug!("Creating API client for {}", base_url);

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a `/v1` resource
    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a GET and map status >= 400 to [`BookshelfError::Api`]
    async fn send(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        tracing::debug!(url, ?query, "GET");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.bytes().await?;
            return Err(BookshelfError::from_response_body(status, &body));
        }
        Ok(response)
    }

    async fn get_data<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let body = self.send(url, query).await?.bytes().await?;
        let envelope: DataEnvelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }

    /// `GET /v1/books`
    pub async fn list_books(&self, query: &BookQuery) -> Result<ResponsePage<BookSummary>> {
        self.get_data(&self.endpoint("books"), &query.to_pairs())
            .await
    }

    /// `GET /v1/books/{id}`
    pub async fn get_book(&self, id: i64) -> Result<BookDetail> {
        self.get_data(&self.endpoint(&format!("books/{}", id)), &[])
            .await
    }

    /// `GET /v1/file_types`
    pub async fn file_types_page(
        &self,
        page: u32,
        size: u32,
        sort: &str,
    ) -> Result<ResponsePage<FileType>> {
        self.get_data(&self.endpoint("file_types"), &lookup_pairs(page, size, sort))
            .await
    }

    /// `GET /v1/publishers`
    pub async fn publishers_page(
        &self,
        page: u32,
        size: u32,
        sort: &str,
    ) -> Result<ResponsePage<Publisher>> {
        self.get_data(&self.endpoint("publishers"), &lookup_pairs(page, size, sort))
            .await
    }

    /// Every file type, `FILE_TYPE_PAGE_SIZE` per request
    pub async fn all_file_types(&self) -> Result<LookupTable> {
        collect_lookup(FILE_TYPE_PAGE_SIZE, |page, size| {
            self.file_types_page(page, size, SortOrder::LOOKUP)
        })
        .await
    }

    /// Every publisher, `PUBLISHER_PAGE_SIZE` per request
    pub async fn all_publishers(&self) -> Result<LookupTable> {
        collect_lookup(PUBLISHER_PAGE_SIZE, |page, size| {
            self.publishers_page(page, size, SortOrder::LOOKUP)
        })
        .await
    }

    /// `{base}/v1/covers/{publisher}/{file}`; the publisher is lowercased
    pub fn cover_url(&self, publisher: &str, cover_file_name: &str) -> String {
        self.endpoint(&format!(
            "covers/{}/{}",
            urlencoding::encode(&publisher.to_lowercase()),
            urlencoding::encode(cover_file_name)
        ))
    }

    /// `{base}/v1/books/{id}/download`
    pub fn download_url(&self, id: i64) -> String {
        self.endpoint(&format!("books/{}/download", id))
    }

    /// Stream the book file into `writer`.
    ///
    /// `on_progress` receives the bytes written so far and the total length when
    /// the server announces one. Returns the number of bytes written.
    pub async fn download_book<W, P>(&self, id: i64, writer: &mut W, mut on_progress: P) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
        P: FnMut(u64, Option<u64>),
    {
        let response = self.send(&self.download_url(id), &[]).await?;
        let total = response.content_length();
        let mut written = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
            on_progress(written, total);
        }
        writer.flush().await?;

        tracing::info!(id, bytes = written, "Downloaded book");
        Ok(written)
    }
}

fn lookup_pairs(page: u32, size: u32, sort: &str) -> Vec<(&'static str, String)> {
    vec![
        ("page", page.to_string()),
        ("size", size.to_string()),
        ("sort", sort.to_string()),
    ]
}

#[async_trait]
impl Catalog for ApiClient {
    async fn list_books(&self, query: &BookQuery) -> Result<ResponsePage<BookSummary>> {
        ApiClient::list_books(self, query).await
    }

    async fn get_book(&self, id: i64) -> Result<BookDetail> {
        ApiClient::get_book(self, id).await
    }

    async fn file_types(&self) -> Result<LookupTable> {
        self.all_file_types().await
    }

    async fn publishers(&self) -> Result<LookupTable> {
        self.all_publishers().await
    }

    fn cover_url(&self, publisher: &str, cover_file_name: &str) -> String {
        ApiClient::cover_url(self, publisher, cover_file_name)
    }

    fn download_url(&self, id: i64) -> String {
        ApiClient::download_url(self, id)
    }
}
