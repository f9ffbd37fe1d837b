//! Application state

use bookshelf_core::{Catalog, LookupTable, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Remote catalog the pages are built from
    pub catalog: Arc<dyn Catalog>,

    /// Books per list page
    pub page_size: u32,

    /// File type names, fetched on first use
    pub file_types: Arc<RwLock<Option<LookupTable>>>,

    /// Publisher names, fetched on first use
    pub publishers: Arc<RwLock<Option<LookupTable>>>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>, page_size: u32) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            file_types: Arc::new(RwLock::new(None)),
            publishers: Arc::new(RwLock::new(None)),
        }
    }

    /// File type table; a failed fetch is not remembered
    pub async fn file_types(&self) -> Result<LookupTable> {
        if let Some(table) = self.file_types.read().await.as_ref() {
            return Ok(table.clone());
        }

        let table = self.catalog.file_types().await?;
        tracing::debug!(entries = table.len(), "Loaded file types");
        *self.file_types.write().await = Some(table.clone());
        Ok(table)
    }

    /// Publisher table; a failed fetch is not remembered
    pub async fn publishers(&self) -> Result<LookupTable> {
        if let Some(table) = self.publishers.read().await.as_ref() {
            return Ok(table.clone());
        }

        let table = self.catalog.publishers().await?;
        tracing::debug!(entries = table.len(), "Loaded publishers");
        *self.publishers.write().await = Some(table.clone());
        Ok(table)
    }
}
