//! Baseline ordering applied beneath every field sort
//!
//! Books that tie on the requested field need a predictable order. Sorting by
//! series, position in series, author and title first, then stably by the
//! requested field, gives every listing the same secondary ordering.

use super::natural::compare_sequence;
use super::strategy::SortStrategy;
use folio_model::Book;
use std::cmp::Ordering;

/// Series, then sequence, then first author-sort entry, then title.
///
/// Always ascending. Books outside a series come after every series, and a
/// missing sequence comes after every numbered volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackOrder;

impl FallbackOrder {
    pub fn compare(a: &Book, b: &Book) -> Ordering {
        compare_series(&a.series, &b.series)
            .then_with(|| compare_sequence(&a.sequence, &b.sequence))
            .then_with(|| a.primary_author_sort().cmp(b.primary_author_sort()))
            .then_with(|| a.title.cmp(&b.title))
    }
}

impl SortStrategy<Book> for FallbackOrder {
    fn sort(&self, items: &mut [Book]) {
        items.sort_by(Self::compare);
    }
}

fn compare_series(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}
