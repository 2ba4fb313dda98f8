use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        /// Raw file contents, kept so diagnostics can label the offending span.
        src: String,
    },

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert() {
        let err: Error = DomainError::InvalidBankroll.into();
        assert!(matches!(err, Error::Domain(DomainError::InvalidBankroll)));
    }

    #[test]
    fn config_error_messages() {
        let err = ConfigError::MissingField { field: "defaults" };
        assert_eq!(err.to_string(), "missing required field: defaults");

        let err = ConfigError::InvalidValue {
            field: "logging.format",
            reason: "expected pretty or json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for logging.format: expected pretty or json"
        );
    }
}
