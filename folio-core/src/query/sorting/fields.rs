//! Field marker types for compile-time safe sorting
//!
//! These zero-sized types represent the fields a catalog listing can be
//! sorted by. Each marker names its key type and how to extract it.

use super::keys::{OptionalTextKey, RatingKey, StatusKey, TextKey};
use super::traits::SortFieldMarker;
use folio_model::Book;

// Zero-sized field markers

/// Sort by ISBN (plain text)
#[derive(Copy, Clone, Debug)]
pub struct IsbnField;

impl SortFieldMarker for IsbnField {
    type Key = TextKey;
    const ID: &'static str = "isbn";

    fn extract_key(&self, book: &Book) -> TextKey {
        TextKey::new(book.isbn.as_str())
    }
}

/// Sort by title (alphabetical)
#[derive(Copy, Clone, Debug)]
pub struct TitleField;

impl SortFieldMarker for TitleField {
    type Key = TextKey;
    const ID: &'static str = "title";

    fn extract_key(&self, book: &Book) -> TextKey {
        TextKey::new(book.title.as_str())
    }
}

/// Sort by the first "Last, First" author entry
#[derive(Copy, Clone, Debug)]
pub struct AuthorField;

impl SortFieldMarker for AuthorField {
    type Key = TextKey;
    const ID: &'static str = "author";

    fn extract_key(&self, book: &Book) -> TextKey {
        TextKey::new(book.primary_author_sort())
    }
}

/// Sort by series name; books outside a series go last
#[derive(Copy, Clone, Debug)]
pub struct SeriesField;

impl SortFieldMarker for SeriesField {
    type Key = OptionalTextKey;
    const ID: &'static str = "series";

    fn extract_key(&self, book: &Book) -> OptionalTextKey {
        OptionalTextKey::non_empty(&book.series)
    }
}

/// Sort by first genre; books with no genres at all go last
#[derive(Copy, Clone, Debug)]
pub struct GenreField;

impl SortFieldMarker for GenreField {
    type Key = OptionalTextKey;
    const ID: &'static str = "genre";

    fn extract_key(&self, book: &Book) -> OptionalTextKey {
        OptionalTextKey::new(book.primary_genre().map(str::to_string))
    }
}

/// Sort by star rating; unrated books go last
#[derive(Copy, Clone, Debug)]
pub struct RatingField;

impl SortFieldMarker for RatingField {
    type Key = RatingKey;
    const ID: &'static str = "rating";

    fn extract_key(&self, book: &Book) -> RatingKey {
        RatingKey::new(book.rating)
    }
}

/// Sort by reading status icon; books without a status go last
#[derive(Copy, Clone, Debug)]
pub struct StatusField;

impl SortFieldMarker for StatusField {
    type Key = StatusKey;
    const ID: &'static str = "status";

    fn extract_key(&self, book: &Book) -> StatusKey {
        StatusKey::new(book.status_icon)
    }
}
