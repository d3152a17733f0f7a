use std::{collections::HashSet, fs, io::ErrorKind, path::Path};

use folio_model::{Book, ModelError, normalize_isbn};
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Read a plain-text list of ISBNs, one per line.
///
/// Blank lines are skipped and spaces inside an ISBN are removed. A line that
/// cannot be an ISBN fails the whole load with its 1-based line number.
pub fn load_isbns(path: &Path) -> Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    let mut isbns = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        match normalize_isbn(line) {
            Ok(Some(isbn)) => isbns.push(isbn),
            Ok(None) => {}
            Err(ModelError::InvalidIsbn(value)) => {
                return Err(CatalogError::InvalidIsbnLine {
                    line: idx + 1,
                    value,
                });
            }
            Err(other) => return Err(other.into()),
        }
    }

    debug!(path = %path.display(), count = isbns.len(), "loaded ISBN list");
    Ok(isbns)
}

/// ISBNs from `isbns` that the catalog does not hold yet.
///
/// Keeps first-occurrence order and drops repeats within the list.
pub fn pending_isbns(catalog: &[Book], isbns: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = catalog.iter().map(|b| b.isbn.as_str()).collect();
    isbns
        .iter()
        .filter(|isbn| seen.insert(isbn.as_str()))
        .cloned()
        .collect()
}
