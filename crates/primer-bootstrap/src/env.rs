//! Environment lookup

use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::Path;

/// Read-only lookup of named configuration values. Absence is not an error.
pub trait EnvironmentProvider {
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment, optionally backed by a dotenv file.
///
/// Variables set in the process win over the file, matching how `dotenvy`
/// never overrides an existing variable. A variable set to the empty string
/// counts as unset and falls through to the file.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    overlay: HashMap<String, String>,
}

impl ProcessEnv {
    pub fn new() -> Self {
        ProcessEnv {
            overlay: HashMap::new(),
        }
    }

    /// Read `path` as a dotenv file without touching the process environment.
    pub fn with_env_file(path: &Path) -> Result<Self, ConfigError> {
        let env_file_error = |source: dotenvy::Error| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut overlay = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
            let (key, value) = item.map_err(env_file_error)?;
            overlay.insert(key, value);
        }

        tracing::debug!(
            "Loaded {} variables from {}",
            overlay.len(),
            path.display()
        );
        Ok(ProcessEnv { overlay })
    }
}

impl EnvironmentProvider for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| self.overlay.get(name).cloned())
    }
}

/// A fixed set of variables. Useful as a fake in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        StaticEnv {
            vars: HashMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StaticEnv {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentProvider for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
