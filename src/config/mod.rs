use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Zoom limits applied when none are configured
pub mod zoom {
    pub const DEFAULT_MIN_ZOOM: f64 = 0.0;
    pub const DEFAULT_MAX_ZOOM: f64 = 20.0;
}

fn default_min_zoom() -> f64 {
    zoom::DEFAULT_MIN_ZOOM
}
fn default_max_zoom() -> f64 {
    zoom::DEFAULT_MAX_ZOOM
}
fn default_allow_fractional_zoom() -> bool {
    false
}

/// Options controlling how a viewport is fitted to a bounding box
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides:
///
/// ```toml
/// max_zoom = 18
/// tile_size = 512
/// allow_fractional_zoom = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    /// Tile edge in pixels; unset or zero means 256
    #[serde(default)]
    pub tile_size: Option<u32>,
    #[serde(default = "default_allow_fractional_zoom")]
    pub allow_fractional_zoom: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            tile_size: None,
            allow_fractional_zoom: default_allow_fractional_zoom(),
        }
    }
}

impl FitOptions {
    /// Build options with the zero-means-unset convention
    ///
    /// A `max_zoom` of 0 becomes 20 and a `tile_size` of 0 becomes 256, so an
    /// explicit zero maximum cannot be expressed here. Use the builder methods
    /// when 0 is meant literally.
    pub fn from_zero_defaults(
        min_zoom: f64,
        max_zoom: f64,
        tile_size: u32,
        allow_fractional_zoom: bool,
    ) -> Self {
        let or_default = |value: f64, default: f64| if value == 0.0 { default } else { value };
        Self {
            min_zoom: or_default(min_zoom, zoom::DEFAULT_MIN_ZOOM),
            max_zoom: or_default(max_zoom, zoom::DEFAULT_MAX_ZOOM),
            tile_size: (tile_size != 0).then_some(tile_size),
            allow_fractional_zoom,
        }
    }

    pub fn with_min_zoom(mut self, min_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self
    }

    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    pub fn with_fractional_zoom(mut self, allow: bool) -> Self {
        self.allow_fractional_zoom = allow;
        self
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse fit options")
    }

    /// Read options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the first readable config file from the working directory
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(options) => return Some(options),
                Err(e) => log::warn!("Skipping config file {}: {:#}", path.display(), e),
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("geoviewport.toml"),
        PathBuf::from(".geoviewport.toml"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let opts = FitOptions::default();
        assert_eq!(opts.min_zoom, 0.0);
        assert_eq!(opts.max_zoom, 20.0);
        assert_eq!(opts.tile_size, None);
        assert!(!opts.allow_fractional_zoom);
    }

    #[test]
    fn test_zero_defaults() {
        let opts = FitOptions::from_zero_defaults(0.0, 0.0, 0, false);
        assert_eq!(opts, FitOptions::default());

        let opts = FitOptions::from_zero_defaults(2.0, 15.0, 512, true);
        assert_eq!(opts.min_zoom, 2.0);
        assert_eq!(opts.max_zoom, 15.0);
        assert_eq!(opts.tile_size, Some(512));
        assert!(opts.allow_fractional_zoom);
    }

    #[test]
    fn test_builder_keeps_literal_zero() {
        let opts = FitOptions::default().with_max_zoom(0.0);
        assert_eq!(opts.max_zoom, 0.0);
    }

    #[test]
    fn test_partial_toml() {
        let opts = FitOptions::from_toml_str("max_zoom = 18\ntile_size = 512\n").unwrap();
        assert_eq!(opts.min_zoom, 0.0);
        assert_eq!(opts.max_zoom, 18.0);
        assert_eq!(opts.tile_size, Some(512));
        assert!(!opts.allow_fractional_zoom);
    }

    #[test]
    fn test_bad_toml() {
        assert!(FitOptions::from_toml_str("max_zoom = \"high\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("geoviewport.toml");
        fs::write(&path, "allow_fractional_zoom = true\nmin_zoom = 3\n").unwrap();

        let opts = FitOptions::from_file(&path).unwrap();
        assert!(opts.allow_fractional_zoom);
        assert_eq!(opts.min_zoom, 3.0);
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempdir().unwrap();
        let err = FitOptions::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_skips_invalid_files() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        fs::write(&bad, "max_zoom = [").unwrap();
        fs::write(&good, "max_zoom = 12").unwrap();

        let paths = vec![dir.path().join("absent.toml"), bad, good];
        let opts = FitOptions::load_from(&paths).unwrap();
        assert_eq!(opts.max_zoom, 12.0);
    }

    #[test]
    fn test_load_nothing_found() {
        let dir = tempdir().unwrap();
        assert!(FitOptions::load_from(&[dir.path().join("absent.toml")]).is_none());
    }
}
