use std::fs;

use chrono::NaiveDate;
use folio_core::{
    Book, BookEdit, CatalogError, StatusIcon,
    query::{SortCriteria, SortField, SortOrder, ViewKind, categorize, sorted_by_field},
    store::{CatalogStore, load_isbns, pending_isbns},
};
use folio_model::ModelError;
use tempfile::tempdir;

fn sample_books() -> Vec<Book> {
    let mut hobbit = Book::new("9780261102217", "The Hobbit");
    hobbit.authors = vec!["J. R. R. Tolkien".into()];
    hobbit.author_sort = vec!["Tolkien, J. R. R.".into()];
    hobbit.set_status("Current");
    hobbit.set_rating(5).unwrap();

    let mut mort = Book::new("9780552131063", "Mort");
    mort.series = "Discworld".into();
    mort.sequence = "4".into();
    mort.set_status("Read");
    mort.set_rating(4).unwrap();

    let mut dune = Book::new("9780441172719", "Dune");
    dune.set_status("Next");

    let mut broken = Book::new("0000000000", "Lookup failed");
    broken.is_exception = true;
    broken.exception_reason = "no metadata".into();

    vec![mort, hobbit, broken, dune]
}

#[test]
fn save_sorts_by_title_and_loads_back() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("books.json"));

    let mut books = sample_books();
    store.save(&mut books).unwrap();

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Lookup failed", "Mort", "The Hobbit"]);

    let loaded = store.load().unwrap();
    assert_eq!(loaded, books);
}

#[test]
fn saved_file_uses_camel_case_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    let store = CatalogStore::new(&path);

    store.save(&mut sample_books()).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"authorSort\""));
    assert!(raw.contains("\"isException\""));
    assert!(raw.contains("\"statusIcon\": \"C\""));
}

#[test]
fn second_save_backs_up_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    let store = CatalogStore::new(&path);

    // Nothing to back up on the first save.
    store.save(&mut sample_books()).unwrap();
    assert!(!store.backup_dir().exists());

    let first = fs::read_to_string(&path).unwrap();
    let mut fewer = sample_books();
    fewer.truncate(1);
    store.save(&mut fewer).unwrap();

    let backups: Vec<_> = fs::read_dir(store.backup_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);
    assert!(
        backups[0]
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with(" books.json")
    );
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), first);
}

#[test]
fn backup_on_fixed_date() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, "[]").unwrap();

    let store = CatalogStore::new(&path);
    let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
    let target = store.backup_on(date).unwrap().unwrap();

    assert_eq!(target, dir.path().join("backups").join("2023-12-01 books.json"));
    assert_eq!(fs::read_to_string(target).unwrap(), "[]");
}

#[test]
fn clear_errored_removes_exceptions_only() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("books.json"));
    store.save(&mut sample_books()).unwrap();

    assert_eq!(store.clear_errored().unwrap(), 1);
    let remaining = store.load().unwrap();
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|b| !b.is_exception));

    assert_eq!(store.clear_errored().unwrap(), 0);
}

#[test]
fn loaded_catalog_feeds_views_and_sorting() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("books.json"));
    store.save(&mut sample_books()).unwrap();

    let books = store.load().unwrap();
    let views = categorize(&books);
    let counts: Vec<(&str, usize)> = views.iter().map(|v| (v.name, v.len())).collect();
    assert_eq!(
        counts,
        vec![("All Books", 4), ("Reading", 1), ("Next", 1), ("Done", 1), ("Other", 0)]
    );

    let by_rating = sorted_by_field(
        ViewKind::All.populate(&books).books,
        SortCriteria::new(SortField::Rating, SortOrder::Ascending),
    );
    let titles: Vec<&str> = by_rating.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["The Hobbit", "Mort", "Dune", "Lookup failed"]);
}

#[test]
fn pending_list_against_saved_catalog() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("books.json"));
    store.save(&mut sample_books()).unwrap();

    let list = dir.path().join("isbns.txt");
    fs::write(&list, "9780261102217\n978 0575 079212\n\n9780575079212\n").unwrap();

    let isbns = load_isbns(&list).unwrap();
    let pending = pending_isbns(&store.load().unwrap(), &isbns);
    assert_eq!(pending, vec!["9780575079212"]);
}

#[test]
fn malformed_catalog_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(&path, "[{\"isbn\": 5}]").unwrap();

    let err = CatalogStore::new(&path).load().unwrap_err();
    assert!(matches!(err, CatalogError::Serialization(_)));
}

#[test]
fn legacy_nulls_load_as_empty_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(
        &path,
        r#"[{"isbn":"1234567","title":null,"isException":null}]"#,
    )
    .unwrap();

    let books = CatalogStore::new(&path).load().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, "1234567");
    assert_eq!(books[0].title, "");
    assert!(!books[0].is_exception);
}

#[test]
fn series_sort_survives_clearing_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    fs::write(
        &path,
        r#"[
            {"isbn": "9781857231380", "title": "Consider Phlebas", "series": "Culture", "seriesSort": "Culture 01"},
            {"isbn": "0000000000", "title": "Lookup failed", "isException": true}
        ]"#,
    )
    .unwrap();

    let store = CatalogStore::new(&path);
    assert_eq!(store.clear_errored().unwrap(), 1);

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains(r#""seriesSort": "Culture 01""#), "{saved}");
    assert_eq!(store.load().unwrap()[0].series_sort, "Culture 01");
}

#[test]
fn edit_book_updates_and_backs_up() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("books.json"));
    store.save(&mut sample_books()).unwrap();

    let edit = BookEdit {
        status: Some("Current".into()),
        rating: Some(3),
        notes: Some("  reread  ".into()),
        ..Default::default()
    };
    let updated = store.edit_book("9780441172719", &edit).unwrap();
    assert_eq!(updated.status_icon, Some(StatusIcon::CURRENT));
    assert_eq!(updated.notes, "reread");

    let books = store.load().unwrap();
    let dune = books.iter().find(|b| b.title == "Dune").unwrap();
    assert_eq!(dune.status, "Current");
    assert_eq!(dune.rating, 3);
    assert_eq!(ViewKind::Reading.populate(&books).len(), 2);
    assert_eq!(fs::read_dir(store.backup_dir()).unwrap().count(), 1);
}

#[test]
fn edit_book_rejects_unknown_isbn_and_bad_rating() {
    let dir = tempdir().unwrap();
    let store = CatalogStore::new(dir.path().join("books.json"));
    store.save(&mut sample_books()).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let edit = BookEdit {
        status: Some("Read".into()),
        ..Default::default()
    };
    let err = store.edit_book("9999999999", &edit).unwrap_err();
    assert!(matches!(err, CatalogError::BookNotFound(ref isbn) if isbn == "9999999999"));

    let edit = BookEdit {
        rating: Some(6),
        ..Default::default()
    };
    let err = store.edit_book("9780441172719", &edit).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Model(ModelError::InvalidRating(6))
    ));

    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}
