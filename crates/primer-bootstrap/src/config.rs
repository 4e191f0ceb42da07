//! Startup configuration: environment, optional config file, CLI overrides

use crate::env::EnvironmentProvider;
use crate::error::ConfigError;
use primer_core::GraphSeed;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up under the root when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "primer.toml";

pub const USER_VAR: &str = "USER";
pub const HOME_VAR: &str = "HOME";
pub const WORKSPACE_VAR: &str = "PRIMER_WORKSPACE";

/// Used when USER is unset.
pub const DEFAULT_USER: &str = "defaultuser";

/// Directories that must exist before the program runs, relative to the root.
pub const DEFAULT_REQUIRED_DIRS: [&str; 3] = ["uploads", "logs", "temp"];

/// Contents of `primer.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub user: Option<String>,
    pub home: Option<PathBuf>,
    pub workspace: Option<PathBuf>,
    pub required_dirs: Option<Vec<PathBuf>>,
    pub graph: Option<GraphSeed>,
}

impl ConfigFile {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&text, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(file)
    }

    /// Like [`ConfigFile::load`], but a missing file gives the empty config.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Values given on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub workspace: Option<PathBuf>,
}

/// Fully resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    pub user: String,
    pub home: PathBuf,
    pub workspace: PathBuf,
    pub required_dirs: Vec<PathBuf>,
    pub graph: GraphSeed,
}

impl BootstrapConfig {
    /// Resolve each value from, in order: overrides, environment, config
    /// file, derived default. Empty environment values count as unset.
    pub fn resolve(env: &dyn EnvironmentProvider, file: ConfigFile, overrides: Overrides) -> Self {
        let user = lookup(env, USER_VAR)
            .or(file.user)
            .unwrap_or_else(|| {
                tracing::warn!("${} not set, using default: {}", USER_VAR, DEFAULT_USER);
                DEFAULT_USER.to_string()
            });

        let home = lookup(env, HOME_VAR)
            .map(PathBuf::from)
            .or(file.home)
            .unwrap_or_else(|| {
                let home = PathBuf::from("/home").join(&user);
                tracing::info!("${} not set, using default: {}", HOME_VAR, home.display());
                home
            });

        let workspace = overrides
            .workspace
            .or_else(|| lookup(env, WORKSPACE_VAR).map(PathBuf::from))
            .or(file.workspace)
            .unwrap_or_else(|| {
                let workspace = home.join("workspace");
                tracing::info!(
                    "${} not set, using default: {}",
                    WORKSPACE_VAR,
                    workspace.display()
                );
                workspace
            });

        let required_dirs = file
            .required_dirs
            .unwrap_or_else(|| DEFAULT_REQUIRED_DIRS.iter().map(PathBuf::from).collect());

        BootstrapConfig {
            user,
            home,
            workspace,
            required_dirs,
            graph: file.graph.unwrap_or_default(),
        }
    }

    /// Required directories anchored at `root`. Absolute entries stay as is.
    pub fn required_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.required_dirs.iter().map(|dir| root.join(dir)).collect()
    }
}

fn lookup(env: &dyn EnvironmentProvider, name: &str) -> Option<String> {
    env.get(name).filter(|value| !value.is_empty())
}
