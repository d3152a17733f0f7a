//! Settings for the `folio` binary.
//!
//! Each setting is taken from the first layer that provides it: command-line
//! flags, then `FOLIO_*` environment variables, then the TOML config file,
//! then built-in defaults. A `.env` file in the working directory is read
//! into the environment before any layer is consulted.

mod file;

pub use file::{CONFIG_PATH_VAR, ConfigSource, FileConfig, GridSection, SortSection, ViewSection};

use anyhow::{Context, bail};
use folio_core::query::{SortCriteria, SortField, SortOrder, ViewKind};
use std::path::PathBuf;
use tracing::debug;

use crate::{
    grid::DEFAULT_MAX_CELL_WIDTH,
    util::{non_empty_var, parse_bool},
};

/// Narrowest cell that still fits a character in front of the `" ..."` marker.
pub const MIN_CELL_WIDTH: usize = 5;

/// Raw `FOLIO_*` environment values, parsed during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub catalog: Option<String>,
    pub view: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub grid_numbers: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            catalog: non_empty_var("FOLIO_CATALOG"),
            view: non_empty_var("FOLIO_VIEW"),
            sort: non_empty_var("FOLIO_SORT"),
            order: non_empty_var("FOLIO_ORDER"),
            grid_numbers: non_empty_var("FOLIO_GRID_NUMBERS"),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub view: Option<ViewKind>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    pub show_numbers: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    pub max_cell_width: usize,
    pub show_numbers: bool,
    pub show_headers: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            show_numbers: false,
            show_headers: true,
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when no layer names a catalog file.
    pub catalog: Option<PathBuf>,
    pub view: ViewKind,
    pub sort: SortCriteria,
    pub grid: GridSettings,
    pub source: ConfigSource,
}

impl Config {
    /// Read `.env`, the config file and the environment, then apply `cli`.
    pub fn load(cli: &CliOverrides) -> anyhow::Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(dotenvy::Error::Io(_)) => {}
            Err(err) => return Err(err).context("failed to parse .env"),
        }

        let (file, source) = FileConfig::load_from_env()?;
        debug!(?source, "config file resolved");
        Self::resolve(file, source, &EnvOverrides::from_env(), cli)
    }

    /// Merge the layers. Flags beat environment, environment beats the file.
    ///
    /// When no layer sets a sort order the chosen field's default direction
    /// is used, so picking `rating` alone lists the best books first.
    pub fn resolve(
        file: FileConfig,
        source: ConfigSource,
        env: &EnvOverrides,
        cli: &CliOverrides,
    ) -> anyhow::Result<Self> {
        let env_view = env
            .view
            .as_deref()
            .map(str::parse::<ViewKind>)
            .transpose()
            .context("invalid FOLIO_VIEW")?;
        let env_sort = env
            .sort
            .as_deref()
            .map(str::parse::<SortField>)
            .transpose()
            .context("invalid FOLIO_SORT")?;
        let env_order = env
            .order
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()
            .context("invalid FOLIO_ORDER")?;
        let env_numbers = match env.grid_numbers.as_deref() {
            Some(raw) => match parse_bool(raw) {
                Some(value) => Some(value),
                None => bail!("invalid FOLIO_GRID_NUMBERS: {raw:?} is not a boolean"),
            },
            None => None,
        };

        let catalog = cli
            .catalog
            .clone()
            .or_else(|| env.catalog.as_ref().map(PathBuf::from))
            .or(file.catalog);

        let view = cli.view.or(env_view).or(file.view.default).unwrap_or_default();

        let field = cli.sort.or(env_sort).or(file.sort.field);
        let order = cli.order.or(env_order).or(file.sort.order);
        let sort = match (field, order) {
            (Some(field), Some(order)) => SortCriteria::new(field, order),
            (Some(field), None) => SortCriteria::new(field, field.default_order()),
            (None, Some(order)) => SortCriteria::new(SortCriteria::default().field, order),
            (None, None) => SortCriteria::default(),
        };

        let defaults = GridSettings::default();
        let max_cell_width = file.grid.max_cell_width.unwrap_or(defaults.max_cell_width);
        if max_cell_width < MIN_CELL_WIDTH {
            bail!("grid.max_cell_width must be at least {MIN_CELL_WIDTH}, got {max_cell_width}");
        }
        let grid = GridSettings {
            max_cell_width,
            show_numbers: cli
                .show_numbers
                .or(env_numbers)
                .or(file.grid.show_numbers)
                .unwrap_or(defaults.show_numbers),
            show_headers: file.grid.show_headers.unwrap_or(defaults.show_headers),
        };

        Ok(Self {
            catalog,
            view,
            sort,
            grid,
            source,
        })
    }

    /// The catalog path, or an error explaining how to set one.
    pub fn require_catalog(&self) -> anyhow::Result<&PathBuf> {
        self.catalog.as_ref().context(
            "no catalog file configured; pass --catalog, set FOLIO_CATALOG or add `catalog` to the config file",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, sync::Mutex};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn resolve(file: FileConfig, env: EnvOverrides, cli: CliOverrides) -> anyhow::Result<Config> {
        Config::resolve(file, ConfigSource::Default, &env, &cli)
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = resolve(FileConfig::default(), EnvOverrides::default(), CliOverrides::default())
            .unwrap();
        assert_eq!(config.catalog, None);
        assert_eq!(config.view, ViewKind::All);
        assert_eq!(config.sort, SortCriteria::default());
        assert_eq!(config.grid, GridSettings::default());
        assert!(config.require_catalog().is_err());
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = FileConfig {
            catalog: Some("file.json".into()),
            view: ViewSection {
                default: Some(ViewKind::Done),
            },
            sort: SortSection {
                field: Some(SortField::Author),
                order: Some(SortOrder::Descending),
            },
            grid: GridSection {
                show_numbers: Some(false),
                ..Default::default()
            },
        };
        let env = EnvOverrides {
            catalog: Some("env.json".into()),
            view: Some("next".into()),
            grid_numbers: Some("yes".into()),
            ..Default::default()
        };
        let cli = CliOverrides {
            catalog: Some("cli.json".into()),
            ..Default::default()
        };

        let config = resolve(file.clone(), env.clone(), cli).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("cli.json")));
        assert_eq!(config.view, ViewKind::Next);
        assert_eq!(
            config.sort,
            SortCriteria::new(SortField::Author, SortOrder::Descending)
        );
        assert!(config.grid.show_numbers);

        let config = resolve(file, env, CliOverrides::default()).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn sort_field_alone_uses_its_default_direction() {
        let cli = CliOverrides {
            sort: Some(SortField::Rating),
            ..Default::default()
        };
        let config = resolve(FileConfig::default(), EnvOverrides::default(), cli).unwrap();
        assert_eq!(
            config.sort,
            SortCriteria::new(SortField::Rating, SortOrder::Descending)
        );
    }

    #[test]
    fn bad_env_values_are_errors() {
        for env in [
            EnvOverrides {
                view: Some("unread".into()),
                ..Default::default()
            },
            EnvOverrides {
                sort: Some("pages".into()),
                ..Default::default()
            },
            EnvOverrides {
                order: Some("up".into()),
                ..Default::default()
            },
            EnvOverrides {
                grid_numbers: Some("sometimes".into()),
                ..Default::default()
            },
        ] {
            assert!(resolve(FileConfig::default(), env, CliOverrides::default()).is_err());
        }
    }

    #[test]
    fn tiny_cell_width_is_rejected() {
        let file = FileConfig {
            grid: GridSection {
                max_cell_width: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = resolve(file, EnvOverrides::default(), CliOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("max_cell_width"));
    }

    #[test]
    fn config_path_variable_is_honoured() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[sort]\nfield = \"series\"\n").unwrap();

        unsafe { std::env::set_var(CONFIG_PATH_VAR, &path) };
        let loaded = FileConfig::load_from_env();
        unsafe { std::env::remove_var(CONFIG_PATH_VAR) };

        let (config, source) = loaded.unwrap();
        assert_eq!(config.sort.field, Some(SortField::Series));
        assert_eq!(source, ConfigSource::EnvPath(path));
    }

    #[test]
    fn xdg_config_home_is_searched() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("folio");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("config.toml"), "catalog = \"shelf.json\"\n").unwrap();

        let previous = std::env::var_os("XDG_CONFIG_HOME");
        unsafe {
            std::env::remove_var(CONFIG_PATH_VAR);
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }
        let loaded = FileConfig::load_from_env();
        unsafe {
            match previous {
                Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        let (config, source) = loaded.unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("shelf.json")));
        assert_eq!(source, ConfigSource::File(folder.join("config.toml")));
    }
}
