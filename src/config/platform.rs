//! Execution platform selection

use crate::config::types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Which platform intercepts and executes guest instructions.
///
/// `Ptrace` is discriminant 0 and therefore the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlatformType {
    /// Run the sandbox with the ptrace platform
    #[default]
    Ptrace,
    /// Run the sandbox with the KVM platform
    Kvm,
}

impl PlatformType {
    /// Name used in error messages
    pub const KIND: &'static str = "platform type";

    /// All variants in declaration order
    pub const ALL: [PlatformType; 2] = [PlatformType::Ptrace, PlatformType::Kvm];

    /// Parse from the exact lowercase literal. No trimming or case folding.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "ptrace" => Ok(PlatformType::Ptrace),
            "kvm" => Ok(PlatformType::Kvm),
            _ => Err(ConfigError::invalid(Self::KIND, raw)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformType::Ptrace => "ptrace",
            PlatformType::Kvm => "kvm",
        }
    }

    pub const fn discriminant(self) -> u32 {
        self as u32
    }

    /// Checked decoding of a raw discriminant (e.g. one read back from storage)
    pub fn from_discriminant(value: u32) -> Option<Self> {
        match value {
            0 => Some(PlatformType::Ptrace),
            1 => Some(PlatformType::Kvm),
            _ => None,
        }
    }

    /// Render a raw discriminant. Out-of-range values render as `unknown(N)`.
    pub fn render_discriminant(value: u32) -> Cow<'static, str> {
        match Self::from_discriminant(value) {
            Some(platform) => Cow::Borrowed(platform.as_str()),
            None => Cow::Owned(format!("unknown({})", value)),
        }
    }

    /// Whether guest code runs under hardware virtualization
    pub fn is_virtualized(self) -> bool {
        matches!(self, PlatformType::Kvm)
    }
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PlatformType {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PlatformType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PlatformType> for String {
    fn from(value: PlatformType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ptrace() {
        let platform = PlatformType::parse("ptrace").unwrap();
        assert_eq!(platform, PlatformType::Ptrace);
        assert_eq!(platform.to_string(), "ptrace");
    }

    #[test]
    fn test_round_trip_all_literals() {
        for literal in ["ptrace", "kvm"] {
            assert_eq!(PlatformType::parse(literal).unwrap().as_str(), literal);
        }
    }

    #[test]
    fn test_case_mismatch_is_rejected() {
        let err = PlatformType::parse("KVM").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid platform type "KVM""#);
    }

    #[test]
    fn test_rejects_padding_and_empty() {
        for raw in ["", " kvm", "kvm ", "\tptrace", "ptrace\n", "Ptrace", "systrap"] {
            assert!(PlatformType::parse(raw).is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_default_is_first_declared() {
        assert_eq!(PlatformType::default(), PlatformType::ALL[0]);
        assert_eq!(PlatformType::default().discriminant(), 0);
        assert_eq!(PlatformType::default().to_string(), "ptrace");
    }

    #[test]
    fn test_discriminants_follow_declaration_order() {
        for (i, platform) in PlatformType::ALL.iter().enumerate() {
            assert_eq!(platform.discriminant(), i as u32);
            assert_eq!(PlatformType::from_discriminant(i as u32), Some(*platform));
        }
        assert_eq!(PlatformType::from_discriminant(2), None);
    }

    #[test]
    fn test_render_unknown_discriminant() {
        assert_eq!(PlatformType::render_discriminant(1), "kvm");
        assert_eq!(PlatformType::render_discriminant(7), "unknown(7)");
        assert_eq!(
            PlatformType::render_discriminant(u32::MAX),
            format!("unknown({})", u32::MAX)
        );
    }

    #[test]
    fn test_from_str_and_try_from() {
        assert_eq!("kvm".parse::<PlatformType>().unwrap(), PlatformType::Kvm);
        assert_eq!(PlatformType::try_from("ptrace").unwrap(), PlatformType::Ptrace);
        assert!(PlatformType::try_from(String::from("KVM")).is_err());
        assert_eq!(String::from(PlatformType::Kvm), "kvm");
    }

    #[test]
    fn test_is_virtualized() {
        assert!(PlatformType::Kvm.is_virtualized());
        assert!(!PlatformType::Ptrace.is_virtualized());
    }
}
