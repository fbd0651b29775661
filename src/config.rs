use crate::errors::ConfigError;
use std::env;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_host: IpAddr,
    pub api_port: u16,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("API_HOST").ok(),
            env::var("API_PORT").ok(),
            env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| "0.0.0.0".to_string());
        let api_host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port = port.unwrap_or_else(|| "3000".to_string());
        let api_port = match port.trim().parse::<u16>() {
            Ok(p) if p != 0 => p,
            _ => return Err(ConfigError::InvalidPort(port)),
        };

        let log_format = match log_format.as_deref().map(|s| s.trim().to_lowercase()) {
            None => LogFormat::Pretty,
            Some(f) if f.is_empty() || f == "pretty" => LogFormat::Pretty,
            Some(f) if f == "json" => LogFormat::Json,
            Some(f) => return Err(ConfigError::InvalidLogFormat(f)),
        };

        Ok(Self {
            api_host,
            api_port,
            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.api_host, self.api_port)
    }
}
