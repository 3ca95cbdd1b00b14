use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::filter::FieldFilter;
use crate::domain::entities::product::{Product, ProductId};
use crate::RETRY_DELAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Credential rejected (HTTP 401).
    Unauthorized,
    /// Any 5xx status.
    Server(String),
    /// Network trouble, an unexpected status, or an undecodable body.
    Transient(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Unauthorized => write!(f, "invalid API key"),
            FetchError::Server(message) => write!(f, "server error: {message}"),
            FetchError::Transient(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// What the client does about a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    Abort,
    RestartDelayed(Duration),
    RestartNow,
}

impl FetchError {
    pub fn recovery(&self) -> Recovery {
        match self {
            FetchError::Unauthorized => Recovery::Abort,
            FetchError::Server(_) => Recovery::RestartDelayed(RETRY_DELAY),
            FetchError::Transient(_) => Recovery::RestartNow,
        }
    }
}

/// Remote catalog operations.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_ids(&self, offset: usize, limit: usize) -> Result<Vec<ProductId>, FetchError>;

    async fn fetch_items(&self, ids: &[ProductId]) -> Result<Vec<Product>, FetchError>;

    async fn filter_ids(&self, filter: &FieldFilter) -> Result<Vec<ProductId>, FetchError>;
}
