use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::entities::filter::FieldFilter;
use crate::domain::entities::product::{Product, ProductId};
use crate::infra::http::auth::AuthTokenSource;
use crate::infra::http::protocol::{ApiRequest, ApiResponse};
use crate::usecase::ports::api::{CatalogApi, FetchError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpCatalogApi {
    http: reqwest::Client,
    endpoint: String,
    auth: AuthTokenSource,
}

impl HttpCatalogApi {
    pub fn new(endpoint: impl Into<String>, secret: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            auth: AuthTokenSource::new(secret),
        })
    }

    async fn call<P, T>(&self, request: &ApiRequest<P>) -> Result<T, FetchError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Auth", self.auth.current_token())
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(action = request.action, error = %err, "catalog request failed to send");
                FetchError::Transient(err.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(action = request.action, "catalog request unauthorized");
            return Err(FetchError::Unauthorized);
        }
        if status.is_server_error() {
            warn!(action = request.action, status = %status, "catalog server error");
            return Err(FetchError::Server(format!("status {status}")));
        }
        if !status.is_success() {
            warn!(action = request.action, status = %status, "unexpected catalog status");
            return Err(FetchError::Transient(format!("status {status}")));
        }

        let envelope: ApiResponse<T> = response.json().await.map_err(|err| {
            warn!(action = request.action, error = %err, "catalog response failed to decode");
            FetchError::Transient(format!("malformed response: {err}"))
        })?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_ids(&self, offset: usize, limit: usize) -> Result<Vec<ProductId>, FetchError> {
        debug!(action = "get_ids", offset, limit, "catalog request");
        self.call(&ApiRequest::get_ids(offset, limit)).await
    }

    async fn fetch_items(&self, ids: &[ProductId]) -> Result<Vec<Product>, FetchError> {
        debug!(action = "get_items", count = ids.len(), "catalog request");
        self.call(&ApiRequest::get_items(ids)).await
    }

    async fn filter_ids(&self, filter: &FieldFilter) -> Result<Vec<ProductId>, FetchError> {
        debug!(action = "filter", "catalog request");
        self.call(&ApiRequest::filter(filter)).await
    }
}
