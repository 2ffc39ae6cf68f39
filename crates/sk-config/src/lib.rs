mod config;
mod content_config;
mod error;
mod locale_config;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

pub use config::Config;
pub use content_config::ContentConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use locale_config::LocaleConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "SK_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".songkoffi";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;
const DEFAULT_PRODUCTS_PATH: &str = "data/products.json";
const DEFAULT_POSTS_PATH: &str = "data/posts.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
