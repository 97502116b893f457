//! Accessor configuration: which accounts own the tables being read.
//!
//! [`LibraryConfig::load`] layers, lowest precedence first: built-in defaults,
//! a TOML/JSON/YAML file, and `HAMBURGER_*` environment variables
//! (`HAMBURGER_SWAP_CONTRACT`, `HAMBURGER_MINE_CONTRACT`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use hamburger_core::asset::Name;
use hamburger_core::constants::{MINE_CONTRACT, SWAP_CONTRACT};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryConfig {
    /// Owner of the `pairs`, `config` and `deposits` tables.
    pub swap_contract: Name,
    /// Owner of the `pools` table.
    pub mine_contract: Name,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            swap_contract: Name::swap_contract(),
            mine_contract: Name::mine_contract(),
        }
    }
}

impl LibraryConfig {
    /// `<config dir>/hamburger/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hamburger").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist; without one the default path is read if
    /// present. Environment variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("swap_contract", SWAP_CONTRACT)?
            .set_default("mine_contract", MINE_CONTRACT)?;

        match path {
            Some(path) => builder = builder.add_source(File::from(path).required(true)),
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(File::from(default).required(false));
                }
            }
        }

        let cfg: Self = builder
            .add_source(Environment::with_prefix("HAMBURGER"))
            .build()?
            .try_deserialize()?;
        debug!(swap = %cfg.swap_contract, mine = %cfg.mine_contract, "loaded config");
        Ok(cfg)
    }
}
