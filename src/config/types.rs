//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::loader::{self, LoadedConfig};

/// Contract used when neither the CLI nor a profile names one
pub const DEFAULT_CONTRACT: &str = "markdown";

fn default_prompts_dir() -> PathBuf {
    PathBuf::from("prompts")
}

fn default_profiles_dir() -> PathBuf {
    PathBuf::from("profiles")
}

fn default_contract() -> String {
    DEFAULT_CONTRACT.to_string()
}

/// Main configuration structure (`ppc.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the module files and `rules.yml`
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: PathBuf,

    /// Directory searched for named profiles
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,

    /// Default contract
    #[serde(default = "default_contract")]
    pub contract: String,

    /// Prepend the `prompt-id` comment to compiled output
    #[serde(default)]
    pub hash_header: bool,

    /// Variables available to every compile; selection vars win
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_dir: default_prompts_dir(),
            profiles_dir: default_profiles_dir(),
            contract: default_contract(),
            hash_header: false,
            vars: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Find and load the effective configuration, then apply `PPC_*` overrides.
    ///
    /// `explicit` must exist when given. Otherwise `<cwd>/ppc.toml`, then the
    /// user config file, then built-in defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
        loader::discover(explicit, cwd, dirs::config_dir())
    }
}
