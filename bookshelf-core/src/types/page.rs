//! Response envelopes

use serde::{Deserialize, Serialize};

/// `{data: ...}` wrapper every successful response is delivered in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// One page of a paginated listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponsePage<T> {
    /// 1-based page number
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

impl<T> ResponsePage<T> {
    /// Whether the server says there is nothing after this page
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A single field-level error reported by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    #[serde(default)]
    pub field: String,
    pub message: String,
}

/// `{errors: [...]}` body sent with every status >= 400
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrors {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ApiErrors {
    /// All messages joined with a comma
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
