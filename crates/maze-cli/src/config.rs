//! TOML configuration for the `maze` binary.
//!
//! ```toml
//! [glyphs]
//! wall = "#"
//! start = "S"
//! facing = "east"
//!
//! [costs]
//! step = 1
//! turn = 1000
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maze_core::Glyphs;
use maze_paths::{Cost, MoveCosts};
use serde::Deserialize;

/// Default config file looked up in the working directory.
pub const DEFAULT_PATH: &str = "maze.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub glyphs: Glyphs,
    pub costs: MoveCosts,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = basic_toml::from_str(s).context("invalid maze config")?;
        cfg.glyphs.validate()?;
        cfg.costs.validate()?;
        Ok(cfg)
    }

    /// Load from `path`, or from [`DEFAULT_PATH`] if it exists, or fall back
    /// to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("could not read config file at: {}", path.display()))?;
                let cfg = Self::from_toml(&text)
                    .with_context(|| format!("in config file {}", path.display()))?;
                log::info!("loaded config from {}", path.display());
                Ok(cfg)
            }
            None => {
                let path = Path::new(DEFAULT_PATH);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                Self::load(Some(path))
            }
        }
    }

    /// Replace configured costs with command-line values where given.
    pub fn override_costs(&mut self, step: Option<Cost>, turn: Option<Cost>) -> Result<()> {
        if let Some(step) = step {
            self.costs.step = step;
        }
        if let Some(turn) = turn {
            self.costs.turn = turn;
        }
        self.costs.validate()?;
        Ok(())
    }
}
