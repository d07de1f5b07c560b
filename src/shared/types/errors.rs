use thiserror::Error;

/// Failures surfaced by the domain layer.
///
/// A missing record is not an error: lookups return `Ok(None)` and deletes
/// return `Ok(false)`. Only the store itself can fail an operation.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_display() {
        let err = DomainError::storage("connection refused");
        assert_eq!(err.to_string(), "Storage error: connection refused");
    }

    #[test]
    fn invalid_config_display() {
        let err = ConfigError::Invalid("server.api_port must not be 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: server.api_port must not be 0"
        );
    }
}
