//! Filesystem access mode

use crate::config::types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// How the sandbox reaches the host filesystem.
///
/// `Proxy` is discriminant 0 and therefore the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileAccessType {
    /// IO requests go to a gofer process that validates them and forwards
    /// them to the host
    #[default]
    Proxy,
    /// The sandbox is connected directly to the host filesystem
    Direct,
}

impl FileAccessType {
    /// Name used in error messages
    pub const KIND: &'static str = "file access type";

    /// All variants in declaration order
    pub const ALL: [FileAccessType; 2] = [FileAccessType::Proxy, FileAccessType::Direct];

    /// Parse from the exact lowercase literal. No trimming or case folding.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "proxy" => Ok(FileAccessType::Proxy),
            "direct" => Ok(FileAccessType::Direct),
            _ => Err(ConfigError::invalid(Self::KIND, raw)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileAccessType::Proxy => "proxy",
            FileAccessType::Direct => "direct",
        }
    }

    pub const fn discriminant(self) -> u32 {
        self as u32
    }

    pub fn from_discriminant(value: u32) -> Option<Self> {
        match value {
            0 => Some(FileAccessType::Proxy),
            1 => Some(FileAccessType::Direct),
            _ => None,
        }
    }

    /// Render a raw discriminant. Out-of-range values render as `unknown(N)`.
    pub fn render_discriminant(value: u32) -> Cow<'static, str> {
        match Self::from_discriminant(value) {
            Some(access) => Cow::Borrowed(access.as_str()),
            None => Cow::Owned(format!("unknown({})", value)),
        }
    }

    /// Whether filesystem calls are mediated by a separate process
    pub fn is_proxied(self) -> bool {
        matches!(self, FileAccessType::Proxy)
    }
}

impl std::fmt::Display for FileAccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileAccessType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FileAccessType {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for FileAccessType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<FileAccessType> for String {
    fn from(value: FileAccessType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_literals() {
        for literal in ["proxy", "direct"] {
            let access = FileAccessType::parse(literal).unwrap();
            assert_eq!(access.to_string(), literal);
        }
    }

    #[test]
    fn test_rejects_non_literals() {
        for raw in ["", "Proxy", "DIRECT", " direct", "direct ", "gofer"] {
            let err = FileAccessType::parse(raw).unwrap_err();
            assert_eq!(err.kind(), "file access type");
            assert_eq!(err.value(), raw);
        }
    }

    #[test]
    fn test_default_is_proxy() {
        assert_eq!(FileAccessType::default(), FileAccessType::Proxy);
        assert_eq!(FileAccessType::default().to_string(), "proxy");
    }

    #[test]
    fn test_render_unknown_discriminant() {
        assert_eq!(FileAccessType::render_discriminant(0), "proxy");
        assert_eq!(FileAccessType::render_discriminant(2), "unknown(2)");
    }

    #[test]
    fn test_is_proxied() {
        assert!(FileAccessType::Proxy.is_proxied());
        assert!(!FileAccessType::Direct.is_proxied());
    }
}
