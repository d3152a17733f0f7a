//! Catalog listings as text grids.

use folio_core::{Book, query::BookView};

use crate::{config::GridSettings, grid::Grid};

pub const BOOK_COLUMNS: [&str; 8] = [
    "ISBN", "Status", "Title", "Author", "Series", "#", "Rating", "Genre",
];

fn book_row(book: &Book) -> [String; 8] {
    let rating = if book.is_rated() {
        book.rating.to_string()
    } else {
        String::new()
    };

    [
        book.isbn.clone(),
        book.status.clone(),
        book.title.clone(),
        book.author_display(),
        book.series.clone(),
        book.sequence.clone(),
        rating,
        book.genre.join(", "),
    ]
}

/// One row per book, in the order given.
pub fn book_grid(books: &[Book], settings: &GridSettings) -> Grid {
    let mut grid = Grid::new(BOOK_COLUMNS)
        .max_cell_width(settings.max_cell_width)
        .show_headers(settings.show_headers)
        .show_numbers(settings.show_numbers);
    for book in books {
        grid.add_row(book_row(book));
    }
    grid
}

/// Each view's name with its book count.
pub fn views_grid(views: &[BookView]) -> Grid {
    let mut grid = Grid::new(["View", "Books"]);
    for view in views {
        grid.add_row([view.name.to_string(), view.len().to_string()]);
    }
    grid
}
