//! Config resolution: explicit path → environment → XDG config dir → defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::dashboard::DashboardConfig;
use crate::validate::{validate_config, ValidationError};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SALESDASH_CONFIG";

const CONFIG_DIR: &str = "sales_dashboard";
const CONFIG_FILE: &str = "config.json";

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration in {}: {}", .path.display(), join_errors(.errors))]
    Invalid {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ConfigError> for sd_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { source, .. } => sd_common::Error::Io(source),
            other => sd_common::Error::Config(other.to_string()),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Xdg(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Env(p) | ConfigSource::Xdg(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "explicit ({})", p.display()),
            ConfigSource::Env(p) => write!(f, "{} ({})", CONFIG_ENV_VAR, p.display()),
            ConfigSource::Xdg(p) => write!(f, "xdg ({})", p.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// A loaded, validated configuration and its origin.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: DashboardConfig,
    pub source: ConfigSource,
}

impl ResolvedConfig {
    pub fn using_defaults(&self) -> bool {
        self.source == ConfigSource::Defaults
    }
}

/// Resolve the configuration from the process environment.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let xdg_dir = dirs::config_dir();
    resolve_config_from(explicit, env_path.as_deref(), xdg_dir.as_deref())
}

/// Resolution with every input injected.
///
/// An explicit or environment path must exist; a missing XDG file falls
/// through to defaults.
pub fn resolve_config_from(
    explicit: Option<&Path>,
    env_path: Option<&Path>,
    xdg_config_dir: Option<&Path>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(path) = explicit {
        return load(path).map(|config| ResolvedConfig {
            config,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    if let Some(path) = env_path {
        return load(path).map(|config| ResolvedConfig {
            config,
            source: ConfigSource::Env(path.to_path_buf()),
        });
    }

    if let Some(dir) = xdg_config_dir {
        let path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if path.is_file() {
            return load(&path).map(|config| ResolvedConfig {
                config,
                source: ConfigSource::Xdg(path),
            });
        }
        debug!(path = %path.display(), "no config file in XDG dir");
    }

    Ok(ResolvedConfig {
        config: DashboardConfig::default(),
        source: ConfigSource::Defaults,
    })
}

/// Read, parse, and validate one config file.
pub fn load(path: &Path) -> Result<DashboardConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = DashboardConfig::parse_json(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_config(&config).map_err(|errors| ConfigError::Invalid {
        path: path.to_path_buf(),
        errors,
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
