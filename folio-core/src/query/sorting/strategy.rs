//! Strategy pattern for composable sorting
//!
//! Every strategy is a stable sort, so chaining them (least significant
//! first) yields a multi-key order without a combined comparator.

use super::{SortFieldMarker, SortKey};
use crate::query::types::SortOrder;
use folio_model::Book;

/// A sorting strategy that can be composed
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items. Must be stable.
    fn sort(&self, items: &mut [T]);
}

/// Single field sort strategy
#[derive(Debug, Clone, Copy)]
pub struct FieldSort<F: SortFieldMarker> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: SortFieldMarker> FieldSort<F> {
    /// Create a new field sort strategy
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl<F: SortFieldMarker> SortStrategy<Book> for FieldSort<F> {
    fn sort(&self, items: &mut [Book]) {
        let keys: Vec<F::Key> = items
            .iter()
            .map(|item| self.field.extract_key(item))
            .collect();

        // `sort_by` is stable, so equal keys keep their incoming order
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| keys[a].compare_with_order(&keys[b], self.order));

        super::utils::reorder_by_indices(items, &indices);
    }
}

/// Multi-key sort built from stable passes
pub struct ChainedSort<T> {
    strategies: Vec<Box<dyn SortStrategy<T>>>,
}

impl<T> std::fmt::Debug for ChainedSort<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSort")
            .field("strategy_count", &self.strategies.len())
            .finish()
    }
}

impl<T> Default for ChainedSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainedSort<T> {
    /// Create a new chained sort
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Add a sorting strategy to the chain. Earlier strategies take precedence.
    pub fn then_by(mut self, strategy: impl SortStrategy<T> + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }
}

impl<T> SortStrategy<T> for ChainedSort<T> {
    fn sort(&self, items: &mut [T]) {
        // Least significant pass first
        for strategy in self.strategies.iter().rev() {
            strategy.sort(items);
        }
    }
}
