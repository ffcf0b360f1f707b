//! `ppc` subcommands. Each returns the process exit code.

pub mod compile;
pub mod doctor;
pub mod list;

use std::path::{Path, PathBuf};

use ppc::Config;

pub use compile::cmd_compile;
pub use doctor::{cmd_doctor, DoctorArgs};
pub use list::cmd_list;

/// `--prompts` if given, else the configured prompts directory
pub fn prompts_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| config.prompts_dir.clone())
}
