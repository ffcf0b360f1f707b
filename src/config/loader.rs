//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "ppc.toml";

/// Config file looked up under the user config directory
pub const USER_CONFIG_FILE: &str = "ppc/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Effective configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file by precedence and load it with env overrides applied.
pub fn discover(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config_dir: Option<PathBuf>,
) -> Result<LoadedConfig, ConfigError> {
    let source = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            let user = user_config_dir.map(|dir| dir.join(USER_CONFIG_FILE));
            std::iter::once(project)
                .chain(user)
                .find(|candidate| candidate.is_file())
        }
    };

    let (config, warnings) = match &source {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (PPC_* prefix)
fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = var("PPC_PROMPTS_DIR").filter(|v| !v.is_empty()) {
        config.prompts_dir = PathBuf::from(dir);
    }

    if let Some(dir) = var("PPC_PROFILES_DIR").filter(|v| !v.is_empty()) {
        config.profiles_dir = PathBuf::from(dir);
    }

    if let Some(contract) = var("PPC_CONTRACT").filter(|v| !v.is_empty()) {
        config.contract = contract;
    }

    if let Some(val) = var("PPC_HASH_HEADER") {
        match val.to_lowercase().as_str() {
            "1" | "true" => config.hash_header = true,
            "0" | "false" => config.hash_header = false,
            other => {
                tracing::warn!(value = other, "ignoring PPC_HASH_HEADER (expected 1/true or 0/false)")
            }
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["prompts_dir", "profiles_dir", "contract", "hash_header", "vars"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
