//! Book ordering engine
//!
//! This module provides:
//! - Natural-order comparison for series positions
//! - Field marker types and sort keys for the seven sortable fields
//! - The fallback order used to break ties
//! - Strategy types that compose stable sorting passes

pub mod fallback;
pub mod fields;
pub mod keys;
pub mod natural;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use fallback::*;
pub use fields::*;
pub use keys::*;
pub use natural::compare_sequence;
pub use strategy::*;
pub use traits::*;

use crate::query::types::{SortCriteria, SortField, SortOrder};
use folio_model::Book;
use tracing::debug;

/// Fallback order first, then a stable pass on `field`.
fn sort_with<F: SortFieldMarker>(books: &mut [Book], field: F, order: SortOrder) {
    debug!(field = F::ID, %order, count = books.len(), "sorting books");

    ChainedSort::new()
        .then_by(FieldSort::new(field, order))
        .then_by(FallbackOrder)
        .sort(books);
}

/// Reorder `books` in place by `field`.
///
/// Books that tie on `field` are left in fallback order (series, sequence,
/// author, title); books that tie on that too keep their incoming order.
/// Missing values (no series, no genre, unrated, no status) stay last in
/// both directions.
pub fn sort_by_field(books: &mut [Book], field: SortField, order: SortOrder) {
    match field {
        SortField::Isbn => sort_with(books, IsbnField, order),
        SortField::Title => sort_with(books, TitleField, order),
        SortField::Author => sort_with(books, AuthorField, order),
        SortField::Series => sort_with(books, SeriesField, order),
        SortField::Status => sort_with(books, StatusField, order),
        SortField::Rating => sort_with(books, RatingField, order),
        SortField::Genre => sort_with(books, GenreField, order),
    }
}

/// Owned variant of [`sort_by_field`].
pub fn sorted_by_field(mut books: Vec<Book>, criteria: SortCriteria) -> Vec<Book> {
    sort_by_field(&mut books, criteria.field, criteria.order);
    books
}
