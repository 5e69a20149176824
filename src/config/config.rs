//! Boot configuration aggregate

use crate::config::file_access::FileAccessType;
use crate::config::network::NetworkType;
use crate::config::platform::PlatformType;
use crate::config::types::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sandbox settings that the OCI bundle does not carry.
///
/// Built once during process initialization and then shared by `&Config`
/// with the platform launcher, filesystem layer, network stack and
/// syscall filter installer. No cross-field policy is enforced here; each
/// consumer reads only the fields it owns.
///
/// `Default` is the zero-initialized record: empty root directory, the
/// first declared variant of every enum, all flags off, no syscall filter
/// and a zero log size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Runtime root directory. Callers are responsible for it being set.
    pub root_dir: PathBuf,

    /// How the filesystem is accessed
    pub file_access: FileAccessType,

    /// Wrap the root filesystem in an overlay
    pub overlay: bool,

    /// Network stack to use
    pub network: NetworkType,

    /// Log every network packet
    pub log_packets: bool,

    /// Platform to run on
    pub platform: PlatformType,

    /// Enable strace
    pub strace: bool,

    /// Syscalls to trace. When `strace` is set and this is empty, every
    /// syscall is traced. Order is the caller's; matching ignores it.
    pub strace_syscalls: Vec<String>,

    /// Maximum size of data blobs shown in trace output
    pub strace_log_size: u64,

    /// Disable seccomp syscall filters. Filters stay on unless this is set.
    pub disable_seccomp: bool,
}

/// What the trace subsystem should do, derived from the strace fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StraceMode<'a> {
    /// Tracing is off; the filter list and log size are inert
    Disabled,
    /// Tracing is on with an empty filter: trace every syscall
    AllSyscalls,
    /// Tracing is on for the listed syscalls only
    Syscalls(&'a [String]),
}

impl Config {
    pub fn strace_mode(&self) -> StraceMode<'_> {
        if !self.strace {
            StraceMode::Disabled
        } else if self.strace_syscalls.is_empty() {
            StraceMode::AllSyscalls
        } else {
            StraceMode::Syscalls(&self.strace_syscalls)
        }
    }

    /// Whether the syscall filter installer should install seccomp filters
    pub fn seccomp_enabled(&self) -> bool {
        !self.disable_seccomp
    }

    /// Log the effective settings once at startup
    pub fn log_summary(&self) {
        log::info!(
            "Boot config: root={} platform={} file_access={} overlay={} network={} log_packets={}",
            self.root_dir.display(),
            self.platform,
            self.file_access,
            self.overlay,
            self.network,
            self.log_packets
        );

        match self.strace_mode() {
            StraceMode::Disabled => log::debug!("strace disabled"),
            StraceMode::AllSyscalls => log::debug!(
                "strace enabled for all syscalls (log size {})",
                self.strace_log_size
            ),
            StraceMode::Syscalls(syscalls) => log::debug!(
                "strace enabled for [{}] (log size {})",
                syscalls.join(", "),
                self.strace_log_size
            ),
        }

        if self.disable_seccomp {
            log::warn!("seccomp syscall filters are DISABLED");
        }
    }
}

/// Raw, unparsed inputs for a [`Config`] as a caller collects them
/// (flags, environment, manifest). Enum fields are kept as strings until
/// [`RawConfig::into_config`] parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub root_dir: PathBuf,
    pub file_access: String,
    pub overlay: bool,
    pub network: String,
    pub log_packets: bool,
    pub platform: String,
    pub strace: bool,
    pub strace_syscalls: Vec<String>,
    pub strace_log_size: u64,
    pub disable_seccomp: bool,
}

impl RawConfig {
    /// Parse every enum field and assemble the [`Config`] in one step.
    /// The first invalid value is returned unchanged; nothing is defaulted.
    pub fn into_config(self) -> Result<Config> {
        let platform = PlatformType::parse(&self.platform)?;
        let file_access = FileAccessType::parse(&self.file_access)?;
        let network = NetworkType::parse(&self.network)?;

        let config = Config {
            root_dir: self.root_dir,
            file_access,
            overlay: self.overlay,
            network,
            log_packets: self.log_packets,
            platform,
            strace: self.strace,
            strace_syscalls: self.strace_syscalls,
            strace_log_size: self.strace_log_size,
            disable_seccomp: self.disable_seccomp,
        };

        log::debug!("Assembled boot config: {:?}", config);
        Ok(config)
    }
}
