//! Structured logging setup.
//!
//! The library itself only emits `tracing` spans and events; hosts that do not
//! install their own subscriber can call [`init_tracing`] once at startup.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
