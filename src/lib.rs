//! boxboot: boot-time configuration model for a sandboxed execution runtime
//!
//! # Architecture
//!
//! ## Configuration ([`config`])
//! - [`config::platform`]: Execution platform (`ptrace`, `kvm`)
//! - [`config::file_access`]: Filesystem access mode (`proxy`, `direct`)
//! - [`config::network`]: Network stack (`sandbox`, `host`, `none`)
//! - [`config::config`]: The [`Config`] aggregate and raw-input assembly
//! - [`config::types`]: Error and result types
//!
//! Launching the platform, proxying filesystem calls, installing seccomp
//! filters and wiring network stacks happen elsewhere. Those collaborators
//! receive a `&Config` and read the fields they own:
//!
//! | Consumer                 | Fields                                          |
//! |--------------------------|-------------------------------------------------|
//! | platform launcher        | `platform`                                      |
//! | filesystem layer         | `file_access`, `overlay`, `root_dir`            |
//! | network stack selector   | `network`, `log_packets`                        |
//! | syscall filter installer | `disable_seccomp`                               |
//! | trace subsystem          | `strace`, `strace_syscalls`, `strace_log_size`  |
//!
//! # Design Principles
//!
//! 1. **Exact parsing** - Only the lowercase literals parse; no trimming, no
//!    case folding, no silent fallback to a default
//! 2. **Total rendering** - Rendering never fails, even for a raw
//!    discriminant outside the declared domain (`unknown(N)`)
//! 3. **Zero value is the first variant** - `Default` is documented, not
//!    accidental
//! 4. **Plain values** - Everything is immutable after construction and
//!    `Send + Sync`

pub mod config;

pub use config::config::{Config, RawConfig, StraceMode};
pub use config::file_access::FileAccessType;
pub use config::network::NetworkType;
pub use config::platform::PlatformType;
pub use config::types::{ConfigError, Result};
