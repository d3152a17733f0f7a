//! Core traits for sortable book fields
//!
//! A sort field is a zero-sized marker type that knows how to pull its key
//! out of a [`Book`]. Keys carry their own notion of "missing", which is
//! how empty values stay last no matter which direction was requested.

use crate::query::types::SortOrder;
use folio_model::Book;
use std::cmp::Ordering;

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Unique identifier for this field
    const ID: &'static str;

    /// Extract this field's sort key from a book
    fn extract_key(&self, book: &Book) -> Self::Key;
}

/// Keys that can be compared for sorting
///
/// `Ord` gives the ascending order among present values. Missing values are
/// placed by [`SortKey::compare_with_order`], never by `Ord`.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    fn compare_with_order(&self, other: &Self, order: SortOrder) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if order.is_descending() => other.cmp(self),
            (false, false) => self.cmp(other),
        }
    }
}
