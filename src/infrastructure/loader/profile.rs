//! Profile files
//!
//! A profile is a YAML preset of compile flags, looked up by name in the
//! profiles directory or read from an explicit path.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;

/// Prefix every profile trait must carry
pub const TRAIT_PREFIX: &str = "traits/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub contract: String,
    #[serde(default)]
    pub revisions: Option<u32>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

impl Profile {
    /// Check required fields and trait ids
    pub fn validate(&self) -> Result<(), String> {
        if self.mode.is_empty() {
            return Err("mode is required".to_string());
        }
        if self.contract.is_empty() {
            return Err("contract is required".to_string());
        }
        if let Some(bad) = self
            .traits
            .iter()
            .find(|t| !t.is_empty() && !t.starts_with(TRAIT_PREFIX))
        {
            return Err(format!(
                "trait {bad:?} must be module ID (e.g., traits/conservative)"
            ));
        }
        Ok(())
    }
}

/// Path of the named profile: `<profiles_dir>/<name>.yml`
pub fn profile_path(profiles_dir: &Path, name: &str) -> PathBuf {
    profiles_dir.join(format!("{name}.yml"))
}

/// Load the named profile from `profiles_dir`
pub fn load_profile(profiles_dir: &Path, name: &str) -> Result<Profile, LoadError> {
    load_profile_file(&profile_path(profiles_dir, name))
}

/// Load and validate a profile from an arbitrary path
pub fn load_profile_file(path: &Path) -> Result<Profile, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::ProfileUnreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let profile: Profile =
        serde_yaml_ng::from_str(&content).map_err(|e| LoadError::InvalidProfile {
            path: path.to_path_buf(),
            message: format!("invalid YAML: {e}"),
        })?;

    profile
        .validate()
        .map_err(|message| LoadError::InvalidProfile {
            path: path.to_path_buf(),
            message,
        })?;

    tracing::info!(path = %path.display(), mode = %profile.mode, "loaded profile");
    Ok(profile)
}
