use crate::error::{Result, RoloError};
use crate::model::LeapDayPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolo, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Where Feb 29 birthdays fall in common years
    #[serde(default)]
    pub leap_day: LeapDayPolicy,

    /// Color the command output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            leap_day: LeapDayPolicy::default(),
            color: default_color(),
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(RoloError::Io(e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| RoloError::Config(format!("{}: {}", config_path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.leap_day, LeapDayPolicy::Feb28);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"leap_day": "mar1"}"#).unwrap();

        let config = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(config.leap_day, LeapDayPolicy::Mar1);
        assert!(config.color);
    }

    #[test]
    fn test_load_rejects_unknown_policy() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"leap_day": "feb30"}"#).unwrap();

        assert!(matches!(
            RoloConfig::load(dir.path()),
            Err(RoloError::Config(_))
        ));
    }
}
