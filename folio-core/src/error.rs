use std::path::PathBuf;

use folio_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to persist catalog: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No book with ISBN {0} in the catalog")]
    BookNotFound(String),

    #[error("Invalid-looking ISBN on line {line}: {value}")]
    InvalidIsbnLine { line: usize, value: String },

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("Unknown view: {0}")]
    UnknownView(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
