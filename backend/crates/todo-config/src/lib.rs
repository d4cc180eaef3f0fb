mod access_config;
mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod seed_config;
mod server_config;
mod validation_config;

pub use access_config::AccessConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::{SeedConfig, SeedTodo};
pub use server_config::ServerConfig;
pub use validation_config::{
    DEFAULT_MAX_TITLE_LENGTH, MAX_TITLE_LENGTH, MIN_TITLE_LENGTH, ValidationConfig,
};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "TODO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".todo";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_DELETE_REQUIRES_WRITE_SCOPE: bool = true;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
