//! Configuration for taskdesk

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Format used to parse and display due dates (strftime syntax)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether to colorize console output
    #[serde(default = "default_use_color")]
    pub use_color: bool,
}

fn default_date_format() -> String {
    crate::DEFAULT_DATE_FORMAT.to_string()
}

fn default_use_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            use_color: default_use_color(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("taskdesk").join("config.yml")),
            Some(PathBuf::from("taskdesk.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Human-readable hint for the configured date format, e.g. "dd/mm/yyyy"
    pub fn date_hint(&self) -> String {
        self.date_format
            .replace("%d", "dd")
            .replace("%m", "mm")
            .replace("%Y", "yyyy")
            .replace("%y", "yy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert!(config.use_color);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");

        let config = Config {
            date_format: "%Y-%m-%d".to_string(),
            use_color: false,
        };
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert!(!loaded.use_color);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "use_color: false\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
        assert!(!loaded.use_color);
    }

    #[test]
    fn test_date_hint() {
        let config = Config::default();
        assert_eq!(config.date_hint(), "dd/mm/yyyy");

        let iso = Config {
            date_format: "%Y-%m-%d".to_string(),
            use_color: true,
        };
        assert_eq!(iso.date_hint(), "yyyy-mm-dd");
    }
}
