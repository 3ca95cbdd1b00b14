use dioxus::prelude::*;

use crate::domain::entities::catalog::{Catalog, IdSet};
use crate::domain::entities::filter::FilterCriteria;
use crate::domain::entities::product::{Product, ProductId};
use crate::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Retrying,
    Failed(String),
}

/// Monotonic counters tagging in-flight remote operations. A flow claims a
/// number up front and re-checks it after each await; a stale claim lost to
/// a newer operation and its response must be dropped. Universe claims also
/// bump the page counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpSequence {
    universe: u64,
    page: u64,
}

impl OpSequence {
    pub fn begin_universe(&mut self) -> u64 {
        self.universe += 1;
        self.page += 1;
        self.universe
    }

    pub fn universe_is_current(&self, seq: u64) -> bool {
        self.universe == seq
    }

    pub fn begin_page(&mut self) -> u64 {
        self.page += 1;
        self.page
    }

    pub fn page_is_current(&self, seq: u64) -> bool {
        self.page == seq
    }
}

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub catalog: Signal<Catalog>,
    pub products: Signal<Vec<Product>>,
    pub filters: Signal<FilterCriteria>,
    pub phase: Signal<LoadPhase>,
    pub status: Signal<String>,
    pub seq: Signal<OpSequence>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            catalog: use_signal(|| Catalog::new(PAGE_SIZE)),
            products: use_signal(Vec::new),
            filters: use_signal(FilterCriteria::default),
            phase: use_signal(|| LoadPhase::Loading),
            status: use_signal(String::new),
            seq: use_signal(OpSequence::default),
        }
    }

    pub fn begin_universe_op(mut self) -> u64 {
        self.seq.write().begin_universe()
    }

    pub fn universe_op_is_current(&self, seq: u64) -> bool {
        self.seq.read().universe_is_current(seq)
    }

    pub fn begin_page_op(mut self) -> u64 {
        self.seq.write().begin_page()
    }

    pub fn page_op_is_current(&self, seq: u64) -> bool {
        self.seq.read().page_is_current(seq)
    }

    pub fn install_universe(mut self, ids: IdSet) {
        self.catalog.write().replace_ids(ids);
    }

    pub fn change_page(mut self, page: usize) -> bool {
        self.catalog.write().change_page(page)
    }

    pub fn current_window(&self) -> Vec<ProductId> {
        self.catalog.read().window().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_universe_claim_supersedes_the_previous_one() {
        let mut seq = OpSequence::default();
        let first = seq.begin_universe();
        assert!(seq.universe_is_current(first));

        let second = seq.begin_universe();
        assert!(!seq.universe_is_current(first), "the older claim lost");
        assert!(seq.universe_is_current(second));
    }

    #[test]
    fn a_universe_claim_invalidates_in_flight_page_ops() {
        let mut seq = OpSequence::default();
        let page = seq.begin_page();
        seq.begin_universe();

        assert!(
            !seq.page_is_current(page),
            "a page fetch for the old universe must be dropped"
        );
    }

    #[test]
    fn a_page_claim_leaves_universe_ops_current() {
        let mut seq = OpSequence::default();
        let universe = seq.begin_universe();
        let first = seq.begin_page();
        let second = seq.begin_page();

        assert!(seq.universe_is_current(universe));
        assert!(!seq.page_is_current(first));
        assert!(seq.page_is_current(second));
    }
}
