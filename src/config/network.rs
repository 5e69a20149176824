//! Network stack selection

use crate::config::types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Which network stack the sandboxed workload sees.
///
/// `Sandbox` is discriminant 0 and therefore the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkType {
    /// Internal network stack, isolated from the host
    #[default]
    Sandbox,
    /// Network syscalls are redirected to the host network
    Host,
    /// Loopback only, provided by the internal stack
    None,
}

impl NetworkType {
    /// Name used in error messages
    pub const KIND: &'static str = "network type";

    /// All variants in declaration order
    pub const ALL: [NetworkType; 3] = [NetworkType::Sandbox, NetworkType::Host, NetworkType::None];

    /// Parse from the exact lowercase literal. No trimming or case folding.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "sandbox" => Ok(NetworkType::Sandbox),
            "host" => Ok(NetworkType::Host),
            "none" => Ok(NetworkType::None),
            _ => Err(ConfigError::invalid(Self::KIND, raw)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Sandbox => "sandbox",
            NetworkType::Host => "host",
            NetworkType::None => "none",
        }
    }

    pub const fn discriminant(self) -> u32 {
        self as u32
    }

    pub fn from_discriminant(value: u32) -> Option<Self> {
        match value {
            0 => Some(NetworkType::Sandbox),
            1 => Some(NetworkType::Host),
            2 => Some(NetworkType::None),
            _ => None,
        }
    }

    /// Render a raw discriminant. Out-of-range values render as `unknown(N)`.
    pub fn render_discriminant(value: u32) -> Cow<'static, str> {
        match Self::from_discriminant(value) {
            Some(network) => Cow::Borrowed(network.as_str()),
            None => Cow::Owned(format!("unknown({})", value)),
        }
    }

    /// Whether the internal network stack is in use (`sandbox` and `none`)
    pub fn uses_netstack(self) -> bool {
        !matches!(self, NetworkType::Host)
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for NetworkType {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for NetworkType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<NetworkType> for String {
    fn from(value: NetworkType) -> Self {
        value.as_str().to_string()
    }
}
