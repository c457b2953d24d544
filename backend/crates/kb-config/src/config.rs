use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, DatabaseConfig, LoggingConfig, ServerConfig, StorageConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. KB_CONFIG_DIR env var, else ./.kanban/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply KB_* environment overrides
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

    /// Priority: KB_CONFIG_DIR env var > ./.kanban/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|source| ConfigError::WorkingDir { source })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.storage.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn blob_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.blob_dir))
    }

    /// `None` when logging goes to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!("  storage: {}", self.storage.blob_dir);
        info!(
            "  auth: {}",
            if self.auth.enabled {
                "enabled (HS256)"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (sql: {}, colored: {}, file: {})",
            *self.logging.level,
            *self.logging.sql_level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: name={}, title={}, tag={}, comment={}",
            self.validation.max_name_length,
            self.validation.max_title_length,
            self.validation.max_tag_name_length,
            self.validation.max_comment_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KB_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("KB_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("KB_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("KB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("KB_AUTH_JWT_LEEWAY_SECS", &mut self.auth.jwt_leeway_secs);
        Self::apply_env_string("KB_AUTH_DEFAULT_USER_ID", &mut self.auth.default_user_id);
        Self::apply_env_string("KB_AUTH_DEFAULT_USERNAME", &mut self.auth.default_username);

        // Logging
        Self::apply_env_parse("KB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_parse("KB_LOG_SQL_LEVEL", &mut self.logging.sql_level);
        Self::apply_env_bool("KB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KB_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("KB_LOG_DIR", &mut self.logging.dir);

        // Storage
        Self::apply_env_string("KB_STORAGE_BLOB_DIR", &mut self.storage.blob_dir);

        // Validation
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_TAG_NAME_LENGTH",
            &mut self.validation.max_tag_name_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_COMMENT_LENGTH",
            &mut self.validation.max_comment_length,
        );
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(val) = std::env::var(key) {
            *target = val;
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(key) {
            *target = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(val) = std::env::var(key)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(key) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}
