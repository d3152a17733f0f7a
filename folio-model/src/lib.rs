//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod book;
pub mod edit;
pub mod error;
pub mod isbn;
pub mod status;

pub use book::{Book, MAX_RATING};
pub use edit::BookEdit;
pub use error::{ModelError, Result as ModelResult};
pub use isbn::normalize_isbn;
pub use status::{StatusCategory, StatusIcon};
