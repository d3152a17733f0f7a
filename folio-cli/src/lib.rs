//! Command-line front end for the Folio book catalog.
//!
//! The `folio` binary is a thin shell over this library: [`config`] resolves
//! settings from flags, environment and a TOML file, [`grid`] renders
//! fixed-column text tables and [`render`] turns books into grid rows.

#![allow(missing_docs)]

pub mod config;
pub mod grid;
pub mod render;
pub mod util;

pub use config::{CliOverrides, Config, ConfigSource, EnvOverrides, FileConfig, GridSettings};
pub use grid::Grid;
