#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ModelError, Result};
use crate::status::StatusIcon;

/// Highest rating a book can carry. Zero means "unrated".
pub const MAX_RATING: u8 = 5;

/// A single catalog entry.
///
/// The JSON layout matches the catalog file written by earlier versions of
/// the tool: camelCase keys, `null` accepted for every field (read as the
/// empty value) and an empty string for an unset `statusIcon`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Book {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub isbn: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub authors: Vec<String>,
    /// "Last, First" entries. Only the first one is used as a sort key.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub author_sort: Vec<String>,
    /// Empty when the book is not part of a series.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub series: String,
    /// Sortable form of the series name, carried through untouched.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub series_sort: String,
    /// Position within the series, e.g. "2", "10a" or "3.5".
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub sequence: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub genre: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub link: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub is_exception: bool,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub exception_reason: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub modified_utc: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub status: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub rating: u8,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "nullable"))]
    pub notes: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::status::icon_serde")
    )]
    pub status_icon: Option<StatusIcon>,
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// First `author_sort` entry, or `""` when there is none.
    pub fn primary_author_sort(&self) -> &str {
        self.author_sort.first().map(String::as_str).unwrap_or("")
    }

    /// First genre entry, if the book has any genres at all.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genre.first().map(String::as_str)
    }

    pub fn author_display(&self) -> String {
        self.authors.join(" & ")
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    /// Replace the status text and re-derive the icon from it.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.trim().to_string();
        self.status_icon = StatusIcon::from_status(&self.status);
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        if rating > MAX_RATING {
            return Err(ModelError::InvalidRating(rating));
        }
        self.rating = rating;
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
