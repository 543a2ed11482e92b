use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

const DEFAULT_HTTP_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LANGUAGE_FILES_DIRECTORY: &str = "locales";
const DEFAULT_ENVIRONMENT: &str = "dev";
const DEFAULT_READ_TIMEOUT_SECS: u64 = 15;
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_HEADER_BYTES: usize = 1 << 20;

/// Limits applied to every HTTP request at the server boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpLimits {
    /// Time allowed for receiving the request body.
    pub read_timeout: Duration,
    /// Time allowed for handling the request and producing the response.
    pub write_timeout: Duration,
    /// Combined size of all header names and values.
    pub max_header_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
            max_header_bytes: DEFAULT_MAX_HEADER_BYTES,
        }
    }
}

pub struct Config {
    pub environment: String,
    pub database_url: String,
    pub jwt_secret: String,

    pub http_address: SocketAddr,
    pub shutdown_timeout: Duration,
    pub http_limits: HttpLimits,

    pub language_files_directory: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let http_address = var("HTTP_SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_HTTP_SERVER_ADDRESS.to_string());
        let http_address = http_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "HTTP_SERVER_ADDRESS".to_string(),
                value: http_address.clone(),
                reason: e.to_string(),
            })?;

        let number = |name: &str, default: u64| -> Result<u64, ConfigError> {
            match var(name) {
                Some(value) => {
                    value
                        .trim()
                        .parse::<u64>()
                        .map_err(|e| ConfigError::InvalidEnvVar {
                            name: name.to_string(),
                            value: value.clone(),
                            reason: e.to_string(),
                        })
                }
                None => Ok(default),
            }
        };

        let shutdown_timeout =
            number("HTTP_SERVER_SHUTDOWN_TIMEOUT_SECS", DEFAULT_SHUTDOWN_TIMEOUT_SECS)?;
        let http_limits = HttpLimits {
            read_timeout: Duration::from_secs(number(
                "HTTP_SERVER_READ_TIMEOUT_SECS",
                DEFAULT_READ_TIMEOUT_SECS,
            )?),
            write_timeout: Duration::from_secs(number(
                "HTTP_SERVER_WRITE_TIMEOUT_SECS",
                DEFAULT_WRITE_TIMEOUT_SECS,
            )?),
            max_header_bytes: number(
                "HTTP_SERVER_MAX_HEADER_BYTES",
                DEFAULT_MAX_HEADER_BYTES as u64,
            )? as usize,
        };

        Ok(Self {
            environment: var("SERVICE_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_TOKEN_SECRET")?,
            http_address,
            shutdown_timeout: Duration::from_secs(shutdown_timeout),
            http_limits,
            language_files_directory: var("LOCALIZATION_LANGUAGE_FILES_DIRECTORY")
                .unwrap_or_else(|| DEFAULT_LANGUAGE_FILES_DIRECTORY.to_string())
                .into(),
        })
    }
}
