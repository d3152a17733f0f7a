use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};
use folio_model::{Book, BookEdit};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::query::{SortField, SortOrder, sort_by_field};

const BACKUP_DIR: &str = "backups";
const FALLBACK_FILE_NAME: &str = "catalog.json";

/// The JSON file holding the whole catalog.
///
/// Every save first copies the previous file into a `backups/` directory
/// next to it, named after the current local date. Several saves on the same
/// day share one backup file, so the oldest state of the day is not kept.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.parent_dir().join(BACKUP_DIR)
    }

    /// Where a backup taken on `date` is written.
    pub fn backup_path_for(&self, date: NaiveDate) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());
        self.backup_dir()
            .join(format!("{} {}", date.format("%Y-%m-%d"), file_name))
    }

    /// Read the catalog. A file that does not exist yet is an empty catalog.
    pub fn load(&self) -> Result<Vec<Book>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let books: Vec<Book> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    /// Sort by title, back up the previous file and write `books` in its place.
    pub fn save(&self, books: &mut [Book]) -> Result<()> {
        sort_by_field(books, SortField::Title, SortOrder::Ascending);

        self.backup()?;

        let json = serde_json::to_vec_pretty(&*books)?;
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        // Write beside the target so the final rename stays on one filesystem
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        info!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }

    /// Copy the current file into today's backup slot.
    ///
    /// Returns `None` when there is no catalog file to back up.
    pub fn backup(&self) -> Result<Option<PathBuf>> {
        self.backup_on(Local::now().date_naive())
    }

    pub fn backup_on(&self, date: NaiveDate) -> Result<Option<PathBuf>> {
        match fs::metadata(&self.path) {
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "nothing to back up");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        }

        fs::create_dir_all(self.backup_dir())?;
        let target = self.backup_path_for(date);
        fs::copy(&self.path, &target)?;

        info!(backup = %target.display(), "created backup file");
        Ok(Some(target))
    }

    /// Apply `edit` to the book with `isbn` and save the catalog.
    ///
    /// Nothing is written when the ISBN is unknown or the edit is invalid.
    pub fn edit_book(&self, isbn: &str, edit: &BookEdit) -> Result<Book> {
        let mut books = self.load()?;
        let book = books
            .iter_mut()
            .find(|book| book.isbn == isbn)
            .ok_or_else(|| CatalogError::BookNotFound(isbn.to_string()))?;
        edit.apply(book)?;
        let updated = book.clone();

        self.save(&mut books)?;
        info!(isbn, title = %updated.title, "edited book");
        Ok(updated)
    }

    /// Drop records that failed metadata lookup so they are retried on the
    /// next import. Saves only when something was removed.
    pub fn clear_errored(&self) -> Result<usize> {
        let mut books = self.load()?;
        let before = books.len();
        books.retain(|book| !book.is_exception);

        let removed = before - books.len();
        if removed > 0 {
            self.save(&mut books)?;
            info!(removed, "cleared errored books");
        } else {
            debug!("no errored books to clear");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_path_uses_date_prefix() {
        let store = CatalogStore::new("/data/books.json");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            store.backup_path_for(date),
            PathBuf::from("/data/backups/2024-03-09 books.json")
        );
    }

    #[test]
    fn bare_file_name_backs_up_into_cwd() {
        let store = CatalogStore::new("books.json");
        assert_eq!(store.backup_dir(), PathBuf::from("./backups"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.backup().unwrap(), None);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "{ not json").unwrap();

        let err = CatalogStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}
