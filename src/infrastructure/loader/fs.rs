//! File system module source
//!
//! Loads a prompt pack from a directory: every `.md` file below it is a module,
//! `rules.yml` at its root holds the exclusive groups.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Module, ModuleRegistry, RuleSet};
use crate::domain::ports::ModuleSource;
use crate::domain::value_objects::Layer;
use crate::error::LoadError;

use super::frontmatter::{split_frontmatter, Frontmatter, SplitError};

/// Name of the rules file inside the prompts directory
pub const RULES_FILE: &str = "rules.yml";

/// Module source backed by a prompts directory
#[derive(Debug, Clone)]
pub struct FsModuleSource {
    root: PathBuf,
}

impl FsModuleSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Parse one module file. `path` is used for errors and the layer.
    pub fn parse_module(&self, path: &Path, content: &str) -> Result<Module, LoadError> {
        let split = split_frontmatter(content).map_err(|e| match e {
            SplitError::Missing => LoadError::NoFrontmatter {
                file: path.to_path_buf(),
            },
            SplitError::Unclosed => LoadError::UnclosedFrontmatter {
                file: path.to_path_buf(),
            },
        })?;

        let front: Frontmatter = if split.yaml.trim().is_empty() {
            Frontmatter::default()
        } else {
            serde_yaml_ng::from_str(split.yaml).map_err(|e| LoadError::InvalidFrontmatter {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        if front.id.trim().is_empty() {
            return Err(LoadError::MissingId {
                file: path.to_path_buf(),
            });
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let mut module = Module::new(front.id, Layer::from_path(relative), split.body)
            .with_priority(front.priority)
            .with_tags(front.tags)
            .with_requires(front.requires)
            .with_source_path(path);
        if !front.desc.is_empty() {
            module = module.with_description(front.desc);
        }
        Ok(module)
    }
}

impl ModuleSource for FsModuleSource {
    fn load_registry(&self) -> Result<ModuleRegistry, LoadError> {
        if !self.root.is_dir() {
            return Err(LoadError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let mut files = Vec::new();
        collect_markdown(&self.root, &mut files)?;
        files.sort();

        let mut registry = ModuleRegistry::new();
        for path in files {
            let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            let module = self.parse_module(&path, &content)?;
            tracing::trace!(id = module.id(), layer = %module.layer(), "parsed module");

            if let Some(first) = registry.get(module.id()) {
                return Err(LoadError::DuplicateId {
                    id: module.id().to_string(),
                    first: first.source_path().cloned().unwrap_or_default(),
                    second: path,
                });
            }
            registry.insert(module);
        }

        tracing::info!(
            modules = registry.len(),
            dir = %self.root.display(),
            "loaded prompt modules"
        );
        Ok(registry)
    }

    fn load_rules(&self) -> Result<RuleSet, LoadError> {
        let path = self.root.join(RULES_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::MissingRules { path });
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(RuleSet::default());
        }
        serde_yaml_ng::from_str(&content).map_err(|e| LoadError::InvalidRules {
            path,
            message: e.to_string(),
        })
    }
}

fn collect_markdown(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        // symlinked directories are not descended into
        if file_type.is_dir() {
            collect_markdown(&path, out)?;
        } else if is_markdown(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}
