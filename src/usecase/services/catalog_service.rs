use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::catalog::IdSet;
use crate::domain::entities::filter::FieldFilter;
use crate::domain::entities::product::{Product, ProductId};
use crate::usecase::ports::api::{CatalogApi, FetchError, Recovery};
use crate::ID_FETCH_LIMIT;

pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    pub async fn load_universe(&self) -> Result<IdSet, FetchError> {
        let ids = self.api.fetch_ids(0, ID_FETCH_LIMIT).await?;
        Ok(IdSet::new(ids))
    }

    pub async fn load_page(&self, window: &[ProductId]) -> Result<Vec<Product>, FetchError> {
        if window.is_empty() {
            return Ok(Vec::new());
        }
        let items = self.api.fetch_items(window).await?;
        let mut seen = HashSet::new();
        Ok(items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect())
    }

    pub async fn filter_universe(&self, filter: &FieldFilter) -> Result<IdSet, FetchError> {
        let ids = self.api.filter_ids(filter).await?;
        Ok(IdSet::new(ids))
    }

    /// Applies the recovery rule to `failure` and keeps reloading the id
    /// universe until a load lands.
    pub async fn recover_universe(&self, mut failure: FetchError) -> Result<IdSet, FetchError> {
        loop {
            match failure.recovery() {
                Recovery::Abort => return Err(failure),
                Recovery::RestartDelayed(pause) => tokio::time::sleep(pause).await,
                Recovery::RestartNow => {}
            }
            match self.load_universe().await {
                Ok(ids) => return Ok(ids),
                Err(next) => failure = next,
            }
        }
    }
}
