use std::collections::HashSet;

use crate::domain::entities::product::ProductId;

/// Product ids in server order, duplicates removed (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: Vec<ProductId>,
}

impl IdSet {
    pub fn new(raw: Vec<ProductId>) -> Self {
        let mut seen = HashSet::new();
        let ids = raw
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        self.ids.len().div_ceil(page_size)
    }

    /// The id slice backing a 1-based page; pages past the end come back empty.
    pub fn window(&self, page: usize, page_size: usize) -> &[ProductId] {
        let ids = self.as_slice();
        let offset = page.saturating_sub(1) * page_size;
        if offset >= ids.len() {
            return &[];
        }
        let end = (offset + page_size).min(ids.len());
        &ids[offset..end]
    }
}

/// Id universe plus a 1-based page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    ids: IdSet,
    page: usize,
    page_size: usize,
}

impl Catalog {
    pub fn new(page_size: usize) -> Self {
        Self {
            ids: IdSet::default(),
            page: 1,
            page_size,
        }
    }

    /// Installs a new universe and rewinds to page 1.
    pub fn replace_ids(&mut self, ids: IdSet) {
        self.ids = ids;
        self.page = 1;
    }

    pub fn ids(&self) -> &IdSet {
        &self.ids
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.ids.page_count(self.page_size)
    }

    pub fn change_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn window(&self) -> &[ProductId] {
        self.ids.window(self.page, self.page_size)
    }
}
