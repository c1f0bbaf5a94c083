//! Configuration for the region explorer

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::region::Coordinates;

/// Map center and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Viewport {
    pub const fn new(center: Coordinates, zoom: u8) -> Self {
        Self { center, zoom }
    }
}

/// Bounded retry policy for mounting a map whose container is not rendered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountRetry {
    /// Attempts before the pending mount is abandoned
    pub max_attempts: u32,
    /// Delay between attempts in milliseconds
    pub interval_ms: u64,
}

impl Default for MountRetry {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            interval_ms: 50,
        }
    }
}

/// Main explorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Raster tile URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub tile_url: String,
    /// Attribution shown on both maps
    pub attribution: String,
    /// Initial overview viewport
    pub primary_viewport: Viewport,
    /// Zoom applied to the overview map when a region is selected
    pub region_zoom: u8,
    /// Zoom of the per-region detail map
    pub detail_zoom: u8,
    pub primary_max_zoom: u8,
    pub detail_max_zoom: u8,
    /// DOM id of the overview map container
    pub primary_container: String,
    /// DOM id of the detail map container
    pub detail_container: String,
    pub mount_retry: MountRetry,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            primary_viewport: Viewport::new(Coordinates::new(-9.1900, -75.0152), 5),
            region_zoom: 7,
            detail_zoom: 9,
            primary_max_zoom: 18,
            detail_max_zoom: 13,
            primary_container: "map".to_string(),
            detail_container: "department-map".to_string(),
            mount_retry: MountRetry::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
