//! Flat-file persistence for the catalog.

mod catalog;
mod isbns;

pub use catalog::CatalogStore;
pub use isbns::{load_isbns, pending_isbns};
