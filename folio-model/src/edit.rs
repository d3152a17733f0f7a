use crate::book::Book;
use crate::error::Result;

/// A set of user edits to one catalog record.
///
/// Fields left as `None` are not touched. Text values are trimmed before they
/// are stored, and a new status re-derives the status icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookEdit {
    pub status: Option<String>,
    pub rating: Option<u8>,
    pub series: Option<String>,
    pub sequence: Option<String>,
    pub notes: Option<String>,
}

impl BookEdit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the edits. An out-of-range rating leaves `book` unchanged.
    pub fn apply(&self, book: &mut Book) -> Result<()> {
        if let Some(rating) = self.rating {
            book.set_rating(rating)?;
        }
        if let Some(status) = &self.status {
            book.set_status(status);
        }
        if let Some(series) = &self.series {
            book.series = series.trim().to_string();
        }
        if let Some(sequence) = &self.sequence {
            book.sequence = sequence.trim().to_string();
        }
        if let Some(notes) = &self.notes {
            book.notes = notes.trim().to_string();
        }
        Ok(())
    }
}
