//! User configuration for algoviz
//!
//! Read from `~/.config/algoviz/config.toml` (or `$ALGOVIZ_CONFIG_DIR/config.toml`).
//! A missing file means defaults; the file is never written.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, VizError};
use crate::grid::Grid;
use crate::sort::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::step::checked_delay;

pub use types::{GridConfig, VizConfig};

const CONFIG_DIR: &str = "algoviz";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "ALGOVIZ_CONFIG_DIR";

impl VizConfig {
    /// Location of the config file, honoring the environment override
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| VizError::Other("unable to determine config directory".into()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: VizConfig = toml::from_str(&content).map_err(|e| VizError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Check every value against the bounds the controls allow.
    pub fn validate(&self) -> Result<()> {
        checked_delay(self.delay_ms)?;
        if let Some(ms) = self.path_delay_ms {
            checked_delay(ms)?;
        }
        crate::ensure_range!(
            "array size",
            self.array_size,
            MIN_ARRAY_SIZE as u64..=MAX_ARRAY_SIZE as u64
        );
        self.build_grid().map(|_| ())
    }

    /// Inter-step delay for sorting
    pub fn step_delay(&self) -> Result<Duration> {
        checked_delay(self.delay_ms)
    }

    /// Inter-step delay for pathfinding; `None` keeps per-algorithm defaults
    pub fn path_delay(&self) -> Result<Option<Duration>> {
        self.path_delay_ms.map(checked_delay).transpose()
    }

    /// Fresh grid with the configured shape and endpoints
    pub fn build_grid(&self) -> Result<Grid> {
        Grid::new(
            self.grid.rows,
            self.grid.cols,
            self.grid.start,
            self.grid.end,
        )
    }

    /// Human-readable description of where the config comes from
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/algoviz/config.toml".to_string()
        }
    }
}
