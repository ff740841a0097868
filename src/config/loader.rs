//! Configuration loading functionality.
//!
//! This module loads an [`EngineConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads the engine configuration from the specified YAML file.
///
/// Missing fields fall back to their documented defaults, so a minimal
/// file only names the values it overrides.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g. "./config/engine.yaml")
///
/// # Returns
///
/// Returns the parsed [`EngineConfig`] on success, or an error if:
/// - The file is missing
/// - The file contains invalid YAML
/// - The resulting configuration is inconsistent (e.g. an inverted lunch
///   window)
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config;
///
/// let config = config::load("./config/engine.yaml")?;
/// assert_eq!(config.standard_day_minutes, 480);
/// # Ok::<(), worktime_engine::error::EngineError>(())
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
    let path = path.as_ref();
    let config: EngineConfig = load_yaml(path)?;
    config.validate()?;
    Ok(config)
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn config_path() -> &'static str {
        "./config/engine.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.standard_day_minutes, 480);
        assert_eq!(config.lunch_minutes, 30);
        assert_eq!(
            config.lunch_window_start,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(
            config.checkout_nudge_threshold,
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = load("/nonexistent/engine.yaml");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
