use std::net::SocketAddr;
use std::path::PathBuf;

use parla_types::time::{DEFAULT_TIME_FORMAT, TimestampFormat};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server settings, read from `PARLA_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub client_dir: PathBuf,
    pub server_page: PathBuf,
    pub time_format: TimestampFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let host = get("PARLA_HOST", "0.0.0.0");
        let port = get("PARLA_PORT", "3000");
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            var: "PARLA_PORT",
            expected: "port",
            value: port.clone(),
        })?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var: "PARLA_HOST",
                expected: "IP address",
                value: host.clone(),
            })?;

        let time_format = TimestampFormat::new(get("PARLA_TIME_FORMAT", DEFAULT_TIME_FORMAT))
            .map_err(|e| ConfigError::Invalid {
                var: "PARLA_TIME_FORMAT",
                expected: "strftime pattern",
                value: e.0,
            })?;

        Ok(Self {
            addr,
            db_path: get("PARLA_DB_PATH", "parla.db").into(),
            client_dir: get("PARLA_CLIENT_DIR", "./clientes").into(),
            server_page: get("PARLA_SERVER_PAGE", "./servidor.html").into(),
            time_format,
        })
    }
}
