//! Configuration module for Dashgrid.
//!
//! This module provides configuration types and loading functionality.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.
//!
//! Configuration is loaded on demand and handed to the engine by value. The
//! engine never keeps a copy between calls.

pub mod types;

use std::path::{Path, PathBuf};

pub use types::{
    BreakpointConfig, CompactType, ConfigError, DashgridConfig, GridConfig, GridConfigIssue,
    config_paths, load_config as load_config_default, load_config_from_path, parse_config,
};

/// Loads the configuration, falling back to defaults when none is usable.
///
/// A custom path takes precedence over the default search paths. A missing
/// file silently yields the defaults; a broken one is logged and also yields
/// the defaults, so tooling keeps working while the file is being edited.
///
/// Returns the configuration and the path it was read from, if any.
#[must_use]
pub fn load_or_default(custom_path: Option<&Path>) -> (DashgridConfig, Option<PathBuf>) {
    let result = custom_path.map_or_else(load_config_default, load_config_from_path);

    match result {
        Ok((config, path)) => (config, Some(path)),
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            (DashgridConfig::default(), None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            (DashgridConfig::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_or_default_missing_file() {
        let (config, path) = load_or_default(Some(Path::new("/nonexistent/dashgrid.jsonc")));
        assert_eq!(config, DashgridConfig::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_load_or_default_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid": {{ "cols": 0 }} }}"#).unwrap();

        let (config, path) = load_or_default(Some(file.path()));
        assert_eq!(config.grid.cols, 9);
        assert!(path.is_none());
    }

    #[test]
    fn test_load_or_default_reads_custom_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid": {{ "cols": 6, "maxRows": 10 }} }}"#).unwrap();

        let (config, path) = load_or_default(Some(file.path()));
        assert_eq!(config.grid.cols, 6);
        assert_eq!(config.grid.max_rows, Some(10));
        assert_eq!(path.as_deref(), Some(file.path()));
    }
}
