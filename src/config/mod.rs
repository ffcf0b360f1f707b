//! Configuration module for ppc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PPC_*)
//! 3. `--config <path>`, else `./ppc.toml`, else `<user config dir>/ppc/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{Config, DEFAULT_CONTRACT};
