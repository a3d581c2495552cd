//! # SCOPEKEEP Guards
//!
//! Resources released by scope exit rather than by manual calls:
//! - [`ScopeTimer`]: reports how long a scope ran
//! - [`FileHandle`]: owns an open file, closed exactly once
//!
//! Both types are configured through [`GuardConfig`], loaded once from TOML.
//!
//! ## Logging
//!
//! Events go through `tracing`. The library installs no subscriber; without
//! one, logging is free.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod file;
pub mod timer;

pub use config::{FileConfig, GuardConfig, TimeUnit, TimerConfig};
pub use error::{GuardError, GuardResult};
pub use file::FileHandle;
pub use timer::{timing_channel, ScopeTimer, TimingRecord};
