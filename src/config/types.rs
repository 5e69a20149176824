//! Error and result types shared by the configuration model

use thiserror::Error;

/// Configuration errors.
///
/// Raised only when a raw string does not name a declared variant. Never
/// defaulted away: an unrecognized value in a safety-relevant setting must
/// reach whoever is assembling the [`Config`](crate::config::config::Config).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {kind} {value:?}")]
    InvalidConfigValue {
        /// Human-readable name of the enumeration, e.g. "platform type"
        kind: &'static str,
        /// The raw input exactly as received
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        ConfigError::InvalidConfigValue {
            kind,
            value: value.to_string(),
        }
    }

    /// Name of the enumeration that rejected the value
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfigValue { kind, .. } => kind,
        }
    }

    /// The rejected raw value
    pub fn value(&self) -> &str {
        match self {
            ConfigError::InvalidConfigValue { value, .. } => value,
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
