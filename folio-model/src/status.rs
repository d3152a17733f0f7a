//! Reading status classification.
//!
//! A book's free-text status ("Current", "Next up", "Read 2021", ...) is
//! reduced to a single-character [`StatusIcon`]. The icon drives both the
//! status sort and the named views; the text itself is only ever displayed.

use std::fmt;

/// Single-character reading status code.
///
/// `C`, `N`, `R` and `A` are the well-known codes; any other character is an
/// "other" status whose meaning is up to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusIcon(char);

impl StatusIcon {
    pub const CURRENT: StatusIcon = StatusIcon('C');
    pub const NEXT: StatusIcon = StatusIcon('N');
    pub const READ: StatusIcon = StatusIcon('R');
    pub const ABANDONED: StatusIcon = StatusIcon('A');

    /// Wrap a raw icon character as-is.
    pub const fn new(icon: char) -> Self {
        StatusIcon(icon)
    }

    /// Derive the icon from free-text status.
    ///
    /// The first non-whitespace character is used, uppercased when it has a
    /// single-character uppercase form. Empty or whitespace-only text, or text
    /// that starts with punctuation or a symbol, leaves the status unset.
    ///
    /// Earlier versions of the tool took the raw first character without
    /// uppercasing, so `"current"` gave `c` and the book landed in the Other
    /// view. Catalogs saved by those versions keep their stored icon until the
    /// status is set again.
    pub fn from_status(status: &str) -> Option<Self> {
        let first = status.trim_start().chars().next()?;
        if !first.is_alphanumeric() {
            return None;
        }

        let mut upper = first.to_uppercase();
        let icon = match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => first,
        };
        Some(StatusIcon(icon))
    }

    /// Parse a stored icon value. Only the first character is significant.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.chars().next().map(StatusIcon)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn category(self) -> StatusCategory {
        match self.0 {
            'C' => StatusCategory::Current,
            'N' => StatusCategory::Next,
            'R' => StatusCategory::Read,
            'A' => StatusCategory::Abandoned,
            _ => StatusCategory::Other,
        }
    }

    /// `C` and `N` are grouped ahead of everything else when sorting by status.
    pub fn is_priority(self) -> bool {
        matches!(
            self.category(),
            StatusCategory::Current | StatusCategory::Next
        )
    }
}

impl fmt::Display for StatusIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse reading status derived from a [`StatusIcon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Current,
    Next,
    Read,
    Abandoned,
    Other,
}

impl StatusCategory {
    /// Whether this category belongs to one of the four well-known codes.
    pub fn is_known(self) -> bool {
        !matches!(self, StatusCategory::Other)
    }
}

/// Serde adapter storing an optional icon as a (possibly empty) string.
#[cfg(feature = "serde")]
pub(crate) mod icon_serde {
    use super::StatusIcon;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        icon: &Option<StatusIcon>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match icon {
            Some(icon) => serializer.collect_str(icon),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<StatusIcon>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(StatusIcon::parse))
    }
}
