use crate::{ConfigError, ConfigErrorResult, DEFAULT_POSTS_PATH, DEFAULT_PRODUCTS_PATH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub products_path: String,
    pub posts_path: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            products_path: String::from(DEFAULT_PRODUCTS_PATH),
            posts_path: String::from(DEFAULT_POSTS_PATH),
        }
    }
}

impl ContentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.products_path.is_empty() {
            return Err(ConfigError::content("content.products_path cannot be empty"));
        }

        if self.posts_path.is_empty() {
            return Err(ConfigError::content("content.posts_path cannot be empty"));
        }

        Ok(())
    }
}
