use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use folio_cli::{
    config::{CliOverrides, Config},
    render::{book_grid, views_grid},
};
use folio_core::{
    BookEdit,
    query::{SortField, SortOrder, ViewKind, categorize, sort_by_field},
    store::{CatalogStore, load_isbns, pending_isbns},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Browse and maintain a personal book catalog")]
struct Cli {
    /// JSON catalog file (overrides FOLIO_CATALOG and the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one view of the catalog as a table
    List {
        /// all, reading, next, done or other
        #[arg(long)]
        view: Option<ViewKind>,
        /// isbn, title, author, series, status, rating or genre
        #[arg(long)]
        sort: Option<SortField>,
        #[arg(long, conflicts_with = "asc")]
        desc: bool,
        #[arg(long)]
        asc: bool,
        /// Prefix rows with their position
        #[arg(long)]
        numbers: bool,
    },
    /// Show every view with its book count
    Views,
    /// Copy the catalog into today's backup file
    Backup,
    /// Remove records whose metadata lookup failed
    ClearErrors,
    /// List ISBNs from a text file that are not in the catalog yet
    Pending {
        /// One ISBN per line
        isbns: PathBuf,
    },
    /// Change the reading fields of one book and save the catalog
    Edit {
        isbn: String,
        /// New status text; the icon is derived from it
        #[arg(long)]
        status: Option<String>,
        /// 0 (unrated) to 5
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        series: Option<String>,
        #[arg(long)]
        sequence: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            catalog: self.catalog.clone(),
            ..Default::default()
        };
        if let Command::List {
            view,
            sort,
            desc,
            asc,
            numbers,
        } = &self.command
        {
            overrides.view = *view;
            overrides.sort = *sort;
            overrides.order = match (*desc, *asc) {
                (true, _) => Some(SortOrder::Descending),
                (_, true) => Some(SortOrder::Ascending),
                _ => None,
            };
            overrides.show_numbers = numbers.then_some(true);
        }
        overrides
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.overrides())?;
    let store = CatalogStore::new(config.require_catalog()?);

    match cli.command {
        Command::List { .. } => {
            let books = store
                .load()
                .with_context(|| format!("failed to load {}", store.path().display()))?;
            let mut view = config.view.populate(&books);
            sort_by_field(&mut view.books, config.sort.field, config.sort.order);

            println!(
                "{} ({} books, by {} {})",
                view.name,
                view.len(),
                config.sort.field,
                config.sort.order
            );
            print!("{}", book_grid(&view.books, &config.grid));
        }
        Command::Views => {
            let books = store
                .load()
                .with_context(|| format!("failed to load {}", store.path().display()))?;
            print!("{}", views_grid(&categorize(&books)));
        }
        Command::Backup => match store.backup().context("backup failed")? {
            Some(path) => println!("Backup written to {}", path.display()),
            None => println!("No catalog at {}, nothing to back up", store.path().display()),
        },
        Command::ClearErrors => {
            let removed = store.clear_errored().context("failed to clear errored books")?;
            println!("Removed {removed} errored books");
        }
        Command::Pending { isbns } => {
            let wanted = load_isbns(&isbns)
                .with_context(|| format!("failed to read ISBN list {}", isbns.display()))?;
            let books = store
                .load()
                .with_context(|| format!("failed to load {}", store.path().display()))?;
            let pending = pending_isbns(&books, &wanted);
            info!(listed = wanted.len(), pending = pending.len(), "checked ISBN list");
            for isbn in pending {
                println!("{isbn}");
            }
        }
        Command::Edit {
            isbn,
            status,
            rating,
            series,
            sequence,
            notes,
        } => {
            let edit = BookEdit {
                status,
                rating,
                series,
                sequence,
                notes,
            };
            if edit.is_empty() {
                bail!(
                    "nothing to change; pass at least one of \
                     --status, --rating, --series, --sequence or --notes"
                );
            }
            let book = store
                .edit_book(&isbn, &edit)
                .with_context(|| format!("failed to edit {isbn}"))?;
            println!("Updated {} ({})", book.title, book.isbn);
        }
    }

    Ok(())
}
