use crate::display::DisplayPreferences;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "converter.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Result rendering
    #[serde(default)]
    pub display: DisplayPreferences,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            display: DisplayPreferences::default(),
        }
    }
}
