//! Server configuration loading
//!
//! Each setting is resolved independently, highest priority first:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_INDEX_FILE: &str = "index.html";
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const ENV_HOST: &str = "MOODCANVAS_HOST";
pub const ENV_PORT: &str = "MOODCANVAS_PORT";
/// Generic port variable honoured by common hosting platforms
pub const ENV_PORT_FALLBACK: &str = "PORT";
pub const ENV_INDEX_FILE: &str = "MOODCANVAS_INDEX_FILE";
pub const ENV_STATIC_DIR: &str = "MOODCANVAS_STATIC_DIR";
pub const ENV_CONFIG: &str = "MOODCANVAS_CONFIG";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub index_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Platform config location, e.g. `~/.config/moodcanvas/config.toml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("moodcanvas").join("config.toml"))
    }
}

/// Settings supplied on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub index_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    /// Explicit config file; must exist when given
    pub config_file: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Read overrides from `MOODCANVAS_*` variables (and `PORT`)
    pub fn from_env() -> Result<Self> {
        let port = match env_var(ENV_PORT).or_else(|| env_var(ENV_PORT_FALLBACK)) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                Error::Config(format!("Invalid port {:?}: {}", raw, e))
            })?),
            None => None,
        };

        Ok(Self {
            host: env_var(ENV_HOST),
            port,
            index_file: env_var(ENV_INDEX_FILE).map(PathBuf::from),
            static_dir: env_var(ENV_STATIC_DIR).map(PathBuf::from),
            config_file: env_var(ENV_CONFIG).map(PathBuf::from),
        })
    }

    /// Fill unset fields from `lower`
    pub fn or(self, lower: ConfigOverrides) -> Self {
        Self {
            host: self.host.or(lower.host),
            port: self.port.or(lower.port),
            index_file: self.index_file.or(lower.index_file),
            static_dir: self.static_dir.or(lower.static_dir),
            config_file: self.config_file.or(lower.config_file),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Landing page served at `/`
    pub index_file: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from CLI arguments, environment, config file and defaults
    pub fn resolve(cli: ConfigOverrides) -> Result<Self> {
        let overrides = cli.or(ConfigOverrides::from_env()?);

        let file = match &overrides.config_file {
            Some(path) => {
                info!("Loading config file {}", path.display());
                TomlConfig::load(path)?
            }
            None => match TomlConfig::default_path() {
                Some(path) if path.exists() => {
                    info!("Loading config file {}", path.display());
                    TomlConfig::load(&path)?
                }
                _ => {
                    debug!("No config file found, using defaults");
                    TomlConfig::default()
                }
            },
        };

        Ok(Self::merge(overrides, file))
    }

    /// Combine overrides with file settings, falling back to compiled defaults
    pub fn merge(overrides: ConfigOverrides, file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: overrides.host.or(file.host).unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            index_file: overrides
                .index_file
                .or(file.index_file)
                .unwrap_or(defaults.index_file),
            static_dir: overrides
                .static_dir
                .or(file.static_dir)
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Socket address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
