use crate::error::{ModelError, Result};

const MIN_ISBN_LEN: usize = 7;
const MAX_ISBN_LEN: usize = 13;

/// Normalize one line of user-supplied ISBN text.
///
/// All spaces are stripped. Blank input yields `Ok(None)`. Anything outside
/// 7 to 13 characters is rejected; non-digits are allowed since older ISBNs
/// end in `X`.
pub fn normalize_isbn(raw: &str) -> Result<Option<String>> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ' ').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    let len = cleaned.chars().count();
    if !(MIN_ISBN_LEN..=MAX_ISBN_LEN).contains(&len) {
        return Err(ModelError::InvalidIsbn(cleaned));
    }
    Ok(Some(cleaned))
}
