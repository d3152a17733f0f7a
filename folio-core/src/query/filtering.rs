//! Named status views over a catalog.
//!
//! Each view is an eager snapshot: the matching books are copied out of the
//! source collection, in source order, when the view is built. Later edits
//! to the source are not reflected.

use crate::error::CatalogError;
use folio_model::{Book, StatusIcon};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// The fixed set of views a catalog can be browsed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    All,
    Reading,
    Next,
    Done,
    Other,
}

impl ViewKind {
    pub fn all() -> &'static [ViewKind] {
        use ViewKind::*;
        &[All, Reading, Next, Done, Other]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ViewKind::All => "all",
            ViewKind::Reading => "reading",
            ViewKind::Next => "next",
            ViewKind::Done => "done",
            ViewKind::Other => "other",
        }
    }

    /// Display name shown above the listing.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::All => "All Books",
            ViewKind::Reading => "Reading",
            ViewKind::Next => "Next",
            ViewKind::Done => "Done",
            ViewKind::Other => "Other",
        }
    }

    /// Build this view from `source`.
    pub fn populate(&self, source: &[Book]) -> BookView {
        let books = match self {
            ViewKind::All => source.to_vec(),
            ViewKind::Reading => filter_by_status_icon(source, &[StatusIcon::CURRENT]),
            ViewKind::Next => filter_by_status_icon(source, &[StatusIcon::NEXT]),
            ViewKind::Done => filter_by_status_icon(
                source,
                &[StatusIcon::READ, StatusIcon::ABANDONED],
            ),
            ViewKind::Other => {
                let icons: Vec<StatusIcon> = other_status_icons(source).into_iter().collect();
                filter_by_status_icon(source, &icons)
            }
        };

        BookView {
            kind: *self,
            name: self.name(),
            books,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ViewKind::all()
            .iter()
            .copied()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| CatalogError::UnknownView(s.to_string()))
    }
}

/// A named subset of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub kind: ViewKind,
    pub name: &'static str,
    pub books: Vec<Book>,
}

impl BookView {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Build every view, in the order All Books, Reading, Next, Done, Other.
pub fn categorize(books: &[Book]) -> Vec<BookView> {
    ViewKind::all()
        .iter()
        .map(|kind| kind.populate(books))
        .collect()
}

/// Icons present in `source` that are not one of the four well-known codes.
pub fn other_status_icons(source: &[Book]) -> BTreeSet<StatusIcon> {
    source
        .iter()
        .filter_map(|book| book.status_icon)
        .filter(|icon| !icon.category().is_known())
        .collect()
}

fn filter_by_status_icon(source: &[Book], icons: &[StatusIcon]) -> Vec<Book> {
    source
        .iter()
        .filter(|book| book.status_icon.is_some_and(|icon| icons.contains(&icon)))
        .cloned()
        .collect()
}
