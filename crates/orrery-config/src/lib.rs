//! Configuration system for the orrery.
//!
//! Settings persist to disk as RON. Missing fields fall back to defaults and
//! unknown fields are ignored. CLI arguments override loaded values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BodyConfig, Config, DebugConfig, MeshConfig, MotionConfig, MotionKind};
pub use error::ConfigError;
