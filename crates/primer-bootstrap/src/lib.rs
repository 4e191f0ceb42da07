//! Startup collaborators for Primer
//!
//! Environment lookup, required directory checks and configuration
//! resolution consumed by the binary before the initial state is built.

pub mod config;
pub mod dirs;
pub mod env;
pub mod error;


pub use config::{
    BootstrapConfig, ConfigFile, DEFAULT_CONFIG_FILE, DEFAULT_REQUIRED_DIRS, Overrides,
};
pub use dirs::{DirectoryEnsurer, DirectoryReport, EnsureOutcome, FsDirectoryEnsurer, ensure_all};
pub use env::{EnvironmentProvider, ProcessEnv, StaticEnv};
pub use error::{ConfigError, EnsureDirError};
