//! Layer configuration
//!
//! A layer is configured from JSON (every field optional) and can be tweaked
//! through environment variables:
//!
//! - `TILEMAP_WINDOW_WIDTH`: window half width (1..=100)
//! - `TILEMAP_WINDOW_HEIGHT`: window half height (1..=100)
//! - `TILEMAP_WINDOW_DISABLED`: set to "1" or "true" to disable the window
//! - `TILEMAP_MAX_SHAPES`: outline cap per material
//!
//! Unparsable environment values are ignored with a warning.
//!
//! ```json
//! {
//!   "name": "ground",
//!   "window": { "enabled": true, "half_width": 12, "half_height": 8 },
//!   "synonym_groups": [[1, 2, 3], [7, 8]],
//!   "max_shapes": 64
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{SynonymTable, Window, WindowTracker};
use crate::types::{TileId, DEFAULT_HALF_EXTENT, DEFAULT_MAX_SHAPES, MAX_HALF_EXTENT, MIN_HALF_EXTENT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("window {axis} {value} is outside {}..={}", MIN_HALF_EXTENT, MAX_HALF_EXTENT)]
    ExtentOutOfRange { axis: &'static str, value: i32 },
    #[error("max_shapes must be at least 1")]
    ZeroShapeCapacity,
}

/// Tracking window settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub enabled: bool,
    pub half_width: i32,
    pub half_height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            half_width: DEFAULT_HALF_EXTENT,
            half_height: DEFAULT_HALF_EXTENT,
        }
    }
}

/// Settings for one tile layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub name: String,
    pub window: WindowConfig,
    /// Each group lists tile ids that count as one material
    pub synonym_groups: Vec<Vec<u32>>,
    /// Outline cap per material
    pub max_shapes: usize,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            name: "layer".to_string(),
            window: WindowConfig::default(),
            synonym_groups: Vec::new(),
            max_shapes: DEFAULT_MAX_SHAPES,
        }
    }
}

impl LayerConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `TILEMAP_*` overrides on top of the current values.
    ///
    /// Call [`validate`](Self::validate) afterwards.
    pub fn apply_env(&mut self) {
        if let Some(width) = env_parse::<i32>("TILEMAP_WINDOW_WIDTH") {
            self.window.half_width = width;
        }
        if let Some(height) = env_parse::<i32>("TILEMAP_WINDOW_HEIGHT") {
            self.window.half_height = height;
        }
        if let Ok(value) = env::var("TILEMAP_WINDOW_DISABLED") {
            self.window.enabled = !(value == "1" || value.to_lowercase() == "true");
        }
        if let Some(max_shapes) = env_parse::<usize>("TILEMAP_MAX_SHAPES") {
            self.max_shapes = max_shapes;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_HALF_EXTENT..=MAX_HALF_EXTENT;
        if !range.contains(&self.window.half_width) {
            return Err(ConfigError::ExtentOutOfRange {
                axis: "half_width",
                value: self.window.half_width,
            });
        }
        if !range.contains(&self.window.half_height) {
            return Err(ConfigError::ExtentOutOfRange {
                axis: "half_height",
                value: self.window.half_height,
            });
        }
        if self.max_shapes == 0 {
            return Err(ConfigError::ZeroShapeCapacity);
        }
        Ok(())
    }

    /// Synonym table with one class per configured group
    pub fn synonym_table(&self) -> SynonymTable {
        SynonymTable::from_groups(
            self.synonym_groups
                .iter()
                .map(|group| group.iter().map(|&id| TileId(id))),
        )
    }

    /// Fresh tracker for the configured window
    pub fn window_tracker(&self) -> WindowTracker {
        let mut window = Window::new(self.window.half_width, self.window.half_height);
        window.enabled = self.window.enabled;
        WindowTracker::new(window)
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}
