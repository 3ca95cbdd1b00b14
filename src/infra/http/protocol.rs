use serde::{Deserialize, Serialize};

use crate::domain::entities::filter::FieldFilter;
use crate::domain::entities::product::ProductId;

/// Every call is a POST of `{"action": ..., "params": {...}}`.
#[derive(Debug, Serialize)]
pub struct ApiRequest<P> {
    pub action: &'static str,
    pub params: P,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct IdsParams {
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ItemsParams<'a> {
    pub ids: &'a [ProductId],
}

impl ApiRequest<IdsParams> {
    pub fn get_ids(offset: usize, limit: usize) -> Self {
        Self {
            action: "get_ids",
            params: IdsParams { offset, limit },
        }
    }
}

impl<'a> ApiRequest<ItemsParams<'a>> {
    pub fn get_items(ids: &'a [ProductId]) -> Self {
        Self {
            action: "get_items",
            params: ItemsParams { ids },
        }
    }
}

impl<'a> ApiRequest<&'a FieldFilter> {
    pub fn filter(filter: &'a FieldFilter) -> Self {
        Self {
            action: "filter",
            params: filter,
        }
    }
}
