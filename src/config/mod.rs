//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RERANK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::constants::{DEFAULT_MODELS_DIR, DEFAULT_PORT, MODEL_ID};
use crate::model::CrossEncoderConfig;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RERANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `7000`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Root directory the model identifier is resolved under. Default: `./models`.
    pub models_dir: PathBuf,

    /// Explicit model directory (config.json + model.safetensors + tokenizer.json).
    /// Takes precedence over `models_dir`.
    pub model_path: Option<PathBuf>,

    /// Max documents accepted per request. `None` means unlimited.
    pub max_batch_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            model_path: None,
            max_batch_size: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "RERANK_PORT";
    const ENV_BIND_ADDR: &'static str = "RERANK_BIND_ADDR";
    const ENV_MODELS_DIR: &'static str = "RERANK_MODELS_DIR";
    const ENV_MODEL_PATH: &'static str = "RERANK_MODEL_PATH";
    const ENV_MAX_BATCH_SIZE: &'static str = "RERANK_MAX_BATCH_SIZE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let models_dir = Self::parse_path_from_env(Self::ENV_MODELS_DIR, defaults.models_dir);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let max_batch_size = Self::parse_batch_size_from_env()?;

        Ok(Self {
            port,
            bind_addr,
            models_dir,
            model_path,
            max_batch_size,
        })
    }

    /// Checks that the resolved model directory exists (does not inspect its contents).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let model_dir = self.model_dir();

        if !model_dir.exists() {
            return Err(ConfigError::PathNotFound { path: model_dir });
        }
        if !model_dir.is_dir() {
            return Err(ConfigError::NotADirectory { path: model_dir });
        }

        Ok(())
    }

    /// Directory holding the checkpoint: `model_path` if set, else `models_dir/MODEL_ID`.
    pub fn model_dir(&self) -> PathBuf {
        self.model_path
            .clone()
            .unwrap_or_else(|| self.models_dir.join(MODEL_ID))
    }

    /// Loader settings for the configured checkpoint.
    pub fn cross_encoder_config(&self) -> CrossEncoderConfig {
        CrossEncoderConfig::new(self.model_dir())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_batch_size_from_env() -> Result<Option<usize>, ConfigError> {
        let Some(value) = env::var(Self::ENV_MAX_BATCH_SIZE)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        else {
            return Ok(None);
        };

        match value.parse::<usize>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidBatchSize { value }),
            Ok(limit) => Ok(Some(limit)),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
