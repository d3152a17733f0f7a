//! # Folio Core
//!
//! Core library for Folio, a personal book catalog. It provides the ordering
//! and categorization engine used to present the catalog, and the flat-file
//! store the catalog lives in.
//!
//! ## Architecture
//!
//! - [`query`]: sorting by field over a deterministic fallback order, natural
//!   comparison of series positions, and named status views
//! - [`store`]: JSON catalog file with dated backups and ISBN list loading
//!
//! The [`query`] module performs no I/O and never fails; everything fallible
//! lives in [`store`].
//!
//! ## Examples
//!
//! ```
//! use folio_core::query::{SortField, SortOrder, ViewKind, sort_by_field};
//! use folio_model::Book;
//!
//! let mut shelf = vec![Book::new("2", "Mort"), Book::new("1", "Dune")];
//! shelf[0].set_status("Current");
//!
//! let mut reading = ViewKind::Reading.populate(&shelf);
//! sort_by_field(&mut reading.books, SortField::Title, SortOrder::Ascending);
//! assert_eq!(reading.books[0].title, "Mort");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod error;
pub mod query;
pub mod store;

pub use error::{CatalogError, Result};
pub use folio_model::{Book, BookEdit, StatusCategory, StatusIcon};
