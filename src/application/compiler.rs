//! Compile orchestrator
//!
//! Runs the pipeline for one request:
//! 1. Expand the roots to their requires closure
//! 2. Validate exclusive tag groups over the closure
//! 3. Sort into final order
//! 4. Render with the request vars
//! 5. Hash the document
//!
//! `compile` is pure. Every per-compile map is created here and dropped with the
//! result, so one registry can serve any number of compiles.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{ModuleRegistry, RuleSet};
use crate::domain::services::{
    expand_requires, render, sort_modules, validate_exclusive_groups, Provenance,
};
use crate::domain::value_objects::ContentHash;
use crate::error::ResolveError;

/// What to compile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileRequest {
    /// Ids the caller selected explicitly
    pub root_ids: Vec<String>,
    /// Placeholder values
    pub vars: BTreeMap<String, String>,
}

impl CompileRequest {
    pub fn new<I, S>(root_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root_ids: root_ids.into_iter().map(Into::into).collect(),
            vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

/// How a document was assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileMeta {
    /// Roots as requested
    pub root_ids: Vec<String>,
    /// Every id in the closure, in expansion order
    pub closure_ids: Vec<String>,
    /// Ids in document order
    pub final_order: Vec<String>,
    pub provenance: BTreeMap<String, Provenance>,
}

impl CompileMeta {
    /// Whether `id` is only in the document because something required it
    pub fn is_required_only(&self, id: &str) -> bool {
        self.provenance
            .get(id)
            .is_some_and(|p| p.from_requirement && !p.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileResult {
    /// Canonical document, ending in exactly one `\n`
    pub document: String,
    /// SHA-256 of `document`
    pub hash: ContentHash,
    pub meta: CompileMeta,
}

impl CompileResult {
    /// The document as written out, optionally behind the identity header
    pub fn output(&self, with_header: bool) -> String {
        if with_header {
            self.hash.with_header(&self.document)
        } else {
            self.document.clone()
        }
    }
}

/// Compile `request` against `registry` and `rules`.
pub fn compile(
    registry: &ModuleRegistry,
    rules: &RuleSet,
    request: &CompileRequest,
) -> Result<CompileResult, ResolveError> {
    let closure = expand_requires(request.root_ids.as_slice(), registry)?;

    let modules: Vec<_> = closure
        .order
        .iter()
        .filter_map(|id| registry.get(id))
        .collect();

    validate_exclusive_groups(modules.iter().copied(), rules)?;
    tracing::trace!(
        groups = rules.exclusive_groups.len(),
        "exclusive groups satisfied"
    );

    let ordered = sort_modules(modules);
    let final_order: Vec<String> = ordered.iter().map(|m| m.id().to_string()).collect();
    tracing::debug!(modules = final_order.len(), "final order computed");

    let document = render(ordered, &request.vars);
    let hash = ContentHash::from_content(&document);
    tracing::debug!(hash = %hash, bytes = document.len(), "rendered document");

    Ok(CompileResult {
        document,
        hash,
        meta: CompileMeta {
            root_ids: request.root_ids.clone(),
            closure_ids: closure.order,
            final_order,
            provenance: closure.provenance,
        },
    })
}
