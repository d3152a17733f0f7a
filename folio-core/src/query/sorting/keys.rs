//! Sort key types for comparing books
//!
//! These types wrap the values extracted from a book and decide, per field,
//! what counts as a missing value.

use super::traits::SortKey;
use folio_model::StatusIcon;
use std::cmp::{Ordering, Reverse};

/// Plain text key. Never missing; an empty string simply sorts first.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct TextKey(String);

impl TextKey {
    pub fn new(value: impl Into<String>) -> Self {
        TextKey(value.into())
    }
}

impl SortKey for TextKey {
    fn is_missing(&self) -> bool {
        false
    }
}

/// Text key where the absence of a value sorts last in either direction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalTextKey(Option<String>);

impl OptionalTextKey {
    pub fn new(value: Option<String>) -> Self {
        OptionalTextKey(value)
    }

    /// Treat the empty string as missing.
    pub fn non_empty(value: &str) -> Self {
        if value.is_empty() {
            OptionalTextKey(None)
        } else {
            OptionalTextKey(Some(value.to_string()))
        }
    }
}

impl Ord for OptionalTextKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalTextKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalTextKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Star rating key. Zero is "unrated" and missing; among rated books the
/// ascending order is highest first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RatingKey(u8);

impl RatingKey {
    pub fn new(rating: u8) -> Self {
        RatingKey(rating)
    }
}

impl Ord for RatingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        Reverse(self.0).cmp(&Reverse(other.0))
    }
}

impl PartialOrd for RatingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for RatingKey {
    fn is_missing(&self) -> bool {
        self.0 == 0
    }
}

/// Status key ordered by tier first (`C`/`N` ahead of the rest), then by the
/// icon itself. A book without an icon is missing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusKey(Option<StatusIcon>);

impl StatusKey {
    pub fn new(icon: Option<StatusIcon>) -> Self {
        StatusKey(icon)
    }

    fn tier(icon: StatusIcon) -> u8 {
        if icon.is_priority() { 0 } else { 1 }
    }
}

impl Ord for StatusKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self::tier(a)
                .cmp(&Self::tier(b))
                .then_with(|| a.cmp(&b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for StatusKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for StatusKey {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}
