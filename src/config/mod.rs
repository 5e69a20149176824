//! Boot configuration
//!
//! Closed enumerations for platform, file access and network selection, and
//! the aggregate record handed to every subsystem at startup.

pub mod config;
pub mod file_access;
pub mod network;
pub mod platform;
pub mod types;
