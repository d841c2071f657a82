use crate::error::{Result, ShelfError};
use crate::view::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_USER: &str = "me";

/// Configuration for shelfwise, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShelfConfig {
    /// Rows per page in the book list
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,

    /// Whose books to show when no `--user` is given
    #[serde(default = "default_user")]
    pub user: String,
}

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            user: default_user(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 2] = ["page-size", "user"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "user" => Some(self.user.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                self.page_size = value.parse::<NonZeroUsize>().map_err(|_| {
                    ShelfError::Config(format!(
                        "page-size must be a positive whole number, got '{}'",
                        value
                    ))
                })?;
            }
            "user" => {
                if value.trim().is_empty() {
                    return Err(ShelfError::Config("user cannot be empty".to_string()));
                }
                self.user = value.to_string();
            }
            other => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
