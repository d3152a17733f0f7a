//! Fixed-column text tables.

use std::{borrow::Cow, fmt};

pub const COLUMN_PADDING: usize = 3;
pub const DEFAULT_MAX_CELL_WIDTH: usize = 50;
const LINE_CHAR: char = '=';
const ELLIPSIS: &str = " ...";

/// A table of text cells laid out in padded columns.
///
/// Column widths follow the widest cell (headers included), capped at the
/// maximum cell width. Longer cells are shortened by [`truncate_cell`].
#[derive(Debug, Clone)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_cell_width: usize,
    show_headers: bool,
    show_numbers: bool,
}

impl Grid {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            show_headers: true,
            show_numbers: false,
        }
    }

    pub fn max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width;
        self
    }

    pub fn show_headers(mut self, show: bool) -> Self {
        self.show_headers = show;
        self
    }

    /// Prefix each row with its 1-based position.
    pub fn show_numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    /// Append a row. Missing trailing cells are blank; extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let measure = |s: &str| truncate_cell(s, self.max_cell_width).chars().count();
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| measure(&row[i]))
                    .fold(measure(header), usize::max)
            })
            .collect()
    }

    fn write_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        number: Option<&str>,
        number_width: usize,
        cells: &[String],
        widths: &[usize],
    ) -> fmt::Result {
        let mut line = String::new();
        if self.show_numbers {
            let label = number.unwrap_or("");
            line.push_str(&format!("{label:>number_width$}"));
            line.push_str(&" ".repeat(COLUMN_PADDING));
        }
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                line.push_str(&" ".repeat(COLUMN_PADDING));
            }
            let cell = truncate_cell(cell, self.max_cell_width);
            line.push_str(&format!("{cell:<width$}"));
        }
        writeln!(f, "{}", line.trim_end())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let number_width = self.rows.len().to_string().len();

        if self.show_headers {
            self.write_line(f, None, number_width, &self.headers, &widths)?;

            let mut separator = String::new();
            if self.show_numbers {
                separator.extend(std::iter::repeat_n(LINE_CHAR, number_width + COLUMN_PADDING));
            }
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    separator.extend(std::iter::repeat_n(LINE_CHAR, COLUMN_PADDING));
                }
                separator.extend(std::iter::repeat_n(LINE_CHAR, *width));
            }
            writeln!(f, "{separator}")?;
        }

        for (idx, row) in self.rows.iter().enumerate() {
            let number = (idx + 1).to_string();
            self.write_line(f, Some(&number), number_width, row, &widths)?;
        }
        Ok(())
    }
}

/// Shorten `cell` to at most `max` characters.
///
/// The cut lands on the last space within the first `max - 4` characters when
/// that keeps more than half of them, otherwise mid-word. A `" ..."` marker is
/// appended either way.
pub fn truncate_cell(cell: &str, max: usize) -> Cow<'_, str> {
    let len = cell.chars().count();
    if len <= max {
        return Cow::Borrowed(cell);
    }

    let cut = max.saturating_sub(ELLIPSIS.len());
    let chars: Vec<char> = cell.chars().collect();
    let window = &chars[..(cut + 1).min(chars.len())];
    let end = match window.iter().rposition(|c| *c == ' ') {
        Some(space) if space > cut / 2 => space,
        _ => cut,
    };

    let mut truncated: String = chars[..end].iter().collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}
