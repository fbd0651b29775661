use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The caller sent a malformed registration request. Never retried.
    #[error("{0}")]
    PreconditionViolation(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_PORT must be a valid port number (1-65535), got {0:?}")]
    InvalidPort(String),

    #[error("API_HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("LOG_FORMAT must be \"pretty\" or \"json\", got {0:?}")]
    InvalidLogFormat(String),
}
