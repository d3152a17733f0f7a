use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fields available for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Isbn,
    Title,
    Author,
    Series,
    Status,
    Rating,
    Genre,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        use SortField::*;
        &[Isbn, Title, Author, Series, Status, Rating, Genre]
    }

    pub fn id(&self) -> &'static str {
        match self {
            SortField::Isbn => "isbn",
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Series => "series",
            SortField::Status => "status",
            SortField::Rating => "rating",
            SortField::Genre => "genre",
        }
    }

    /// Direction used the first time a field is picked.
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortField::Rating => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SortField::all()
            .iter()
            .copied()
            .find(|field| field.id() == wanted)
            .ok_or_else(|| CatalogError::UnknownSortField(s.to_string()))
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    pub fn flip(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("asc"),
            SortOrder::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(CatalogError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Sort criteria for a catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            field: SortField::Title,
            order: SortOrder::Ascending,
        }
    }
}

impl SortCriteria {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Criteria after the user picks `requested`.
    ///
    /// Picking the field that is already active flips its direction; picking
    /// a different field starts at that field's default direction.
    pub fn next(current: Option<SortCriteria>, requested: SortField) -> Self {
        match current {
            Some(active) if active.field == requested => {
                Self::new(requested, active.order.flip())
            }
            _ => Self::new(requested, requested.default_order()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_case_insensitively() {
        assert_eq!("Rating".parse::<SortField>().unwrap(), SortField::Rating);
        assert_eq!(" isbn ".parse::<SortField>().unwrap(), SortField::Isbn);
        assert!(matches!(
            "pages".parse::<SortField>(),
            Err(CatalogError::UnknownSortField(name)) if name == "pages"
        ));
    }

    #[test]
    fn parses_orders() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn reselecting_a_field_flips_direction() {
        let current = SortCriteria::new(SortField::Title, SortOrder::Ascending);
        let next = SortCriteria::next(Some(current), SortField::Title);
        assert_eq!(next.order, SortOrder::Descending);

        let again = SortCriteria::next(Some(next), SortField::Title);
        assert_eq!(again.order, SortOrder::Ascending);
    }

    #[test]
    fn new_field_starts_at_its_default_direction() {
        let current = SortCriteria::new(SortField::Title, SortOrder::Descending);
        assert_eq!(
            SortCriteria::next(Some(current), SortField::Author),
            SortCriteria::new(SortField::Author, SortOrder::Ascending)
        );
        assert_eq!(
            SortCriteria::next(None, SortField::Rating),
            SortCriteria::new(SortField::Rating, SortOrder::Descending)
        );
    }
}
