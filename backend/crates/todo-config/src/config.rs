use crate::{
    AccessConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, SeedConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub access: AccessConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub seed: SeedConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TODO_CONFIG_DIR env var, else use ./.todo/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TODO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TODO_CONFIG_DIR env var > ./.todo/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.logging.validate()?;
        self.validation.validate()?;
        self.seed.validate(self.validation.max_title_length)?;

        Ok(())
    }

    /// Read the RS256 public key PEM, if one is configured.
    pub fn read_public_key(&self) -> ConfigErrorResult<Option<String>> {
        let config_dir = Self::config_dir()?;

        self.auth
            .public_key_path(&config_dir)
            .map(|path| {
                std::fs::read_to_string(&path).map_err(|e| ConfigError::Io { path, source: e })
            })
            .transpose()
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
                path: log_dir.clone(),
                source: e,
            })?;
        }

        Ok(Some(log_dir.join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  auth: {} (audience: {})",
            self.auth.algorithm(),
            self.auth.audience.as_deref().unwrap_or("any")
        );
        info!(
            "  access: delete_requires_write_scope={}",
            self.access.delete_requires_write_scope
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: max_title_length={}",
            self.validation.max_title_length
        );
        info!("  seed: {} todo(s)", self.seed.todos.len());
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TODO_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TODO_SERVER_PORT", &mut self.server.port);

        // Auth
        Self::apply_env_option_string("TODO_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "TODO_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("TODO_AUTH_AUDIENCE", &mut self.auth.audience);

        // Access
        Self::apply_env_bool(
            "TODO_ACCESS_DELETE_REQUIRES_WRITE_SCOPE",
            &mut self.access.delete_requires_write_scope,
        );

        // Logging
        Self::apply_env_parse("TODO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TODO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TODO_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "TODO_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
