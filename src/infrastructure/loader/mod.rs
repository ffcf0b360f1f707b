//! Prompt pack loading: modules, rules and profiles from disk

mod frontmatter;
mod fs;
mod profile;

pub use frontmatter::{split_frontmatter, Frontmatter, Split, SplitError};
pub use fs::{FsModuleSource, RULES_FILE};
pub use profile::{load_profile, load_profile_file, profile_path, Profile, TRAIT_PREFIX};
