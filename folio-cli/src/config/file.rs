use anyhow::{Context, anyhow};
use folio_core::query::{SortField, SortOrder, ViewKind};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::util::non_empty_var;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";

/// Where the file layer of the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// catalog = "/home/me/books.json"
///
/// [view]
/// default = "reading"
///
/// [sort]
/// field = "rating"
/// order = "desc"
///
/// [grid]
/// max_cell_width = 40
/// show_numbers = true
/// show_headers = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub catalog: Option<PathBuf>,
    pub view: ViewSection,
    pub sort: SortSection,
    pub grid: GridSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewSection {
    pub default: Option<ViewKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortSection {
    pub field: Option<SortField>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSection {
    pub max_cell_width: Option<usize>,
    pub show_numbers: Option<bool>,
    pub show_headers: Option<bool>,
}

impl FileConfig {
    /// Locate and read the config file.
    /// Evaluation order:
    /// 1) `$FOLIO_CONFIG_PATH` (must exist),
    /// 2) `$XDG_CONFIG_HOME/folio/config.toml` or `~/.config/folio/config.toml`,
    /// 3) defaults if neither is present.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Some(path) = non_empty_var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(path) = Self::default_path().filter(|p| p.is_file()) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn default_path() -> Option<PathBuf> {
        let base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|home| Path::new(&home).join(".config")))?;
        Some(base.join("folio").join("config.toml"))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read config from {}", path.display())
        })?;
        Self::parse_str(&contents)
            .map_err(|err| anyhow!("invalid config {}: {}", path.display(), err))
    }

    pub fn parse_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
