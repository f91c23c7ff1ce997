//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::nav::SelectionSeed;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled frontend (`index.html` and assets)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("hr360-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shell behaviour shared with the frontend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShellConfig {
    /// How the navbar picks its initial selection
    #[serde(default)]
    pub selection_seed: SelectionSeed,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter(&self) -> String {
        format!("hr360={},tower_http=debug", self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from `HR360_CONFIG`, the default locations, or the environment
    pub fn load_default() -> Self {
        if let Ok(path) = std::env::var("HR360_CONFIG") {
            match Self::load_with_env(Path::new(&path)) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to load config from HR360_CONFIG: {}", e),
            }
        }

        let config_paths = [
            dirs::config_dir().map(|p| p.join("hr360").join("config.toml")),
            Some(PathBuf::from("/etc/hr360/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("HR360_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HR360_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = var("HR360_ASSETS_DIR") {
            self.server.assets_dir = PathBuf::from(dir);
        }

        // Shell overrides
        if let Some(seed) = var("HR360_SELECTION_SEED") {
            match seed.parse() {
                Ok(seed) => self.shell.selection_seed = seed,
                Err(e) => tracing::warn!("Ignoring HR360_SELECTION_SEED: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("HR360_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HR360_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HR.360 Configuration
#
# Environment variables override these settings:
# - HR360_HOST
# - HR360_PORT
# - HR360_ASSETS_DIR
# - HR360_SELECTION_SEED
# - HR360_LOG_LEVEL
# - HR360_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

# Compiled frontend (trunk build output)
assets_dir = "hr360-ui/dist"

# Allowed CORS origins (empty = same origin only)
cors_origins = []

[shell]
# Initial navbar selection: "fixed" (always Dashboard) or "from_route"
selection_seed = "fixed"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
