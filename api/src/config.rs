//! Server configuration module
//! Reads listen address, storage selection and file locations from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// When set, the catalog is stored in Postgres; otherwise in memory
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub public_dir: PathBuf,
    pub images_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        let public_dir = PathBuf::from("public");
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3001,
            database_url: None,
            db_max_connections: 5,
            images_dir: public_dir.join("images"),
            public_dir,
            max_upload_bytes: 10 * 1024 * 1024,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BIND_ADDR") {
            config.bind_addr = parse_value("BIND_ADDR", &value)?;
        }
        if let Some(value) = lookup("PORT") {
            config.port = parse_value("PORT", &value)?;
        }

        config.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(value) = lookup("DB_MAX_CONNECTIONS") {
            config.db_max_connections = parse_value("DB_MAX_CONNECTIONS", &value)?;
            if config.db_max_connections == 0 {
                return Err(ConfigError::InvalidConfig(
                    "DB_MAX_CONNECTIONS must be at least 1".to_string(),
                ));
            }
        }

        if let Some(dir) = lookup("PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
            config.images_dir = config.public_dir.join("images");
        }
        if let Some(dir) = lookup("IMAGES_DIR") {
            config.images_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup("MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse_value("MAX_UPLOAD_BYTES", &value)?;
        }

        if let Some(value) = lookup("LOG_FORMAT") {
            config.log_format = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "LOG_FORMAT",
                value,
            })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Storage backend name for startup logging
    pub fn storage_name(&self) -> &'static str {
        if self.database_url.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
