//! Doctor
//!
//! Static health check over a whole prompt pack, independent of any selection.
//! Errors make the pack unusable; warnings flag dead weight. Strict mode treats
//! warnings as failures.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::entities::{ModuleRegistry, RuleSet};
use crate::domain::ports::ModuleSource;
use crate::domain::services::{first_cycle, reachable_from_entrypoints, BASE_ID};
use crate::domain::value_objects::{KeyedTag, Layer};
use crate::error::ResolveError;

/// Exit code for a failed doctor run
pub const DOCTOR_FAILURE_EXIT_CODE: i32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoctorOptions {
    /// Warnings fail the run
    pub strict: bool,
    /// Attach `stats` to the report
    pub stats: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Ok,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorStats {
    pub modules: usize,
    pub by_layer: BTreeMap<Layer, usize>,
    pub unreachable: usize,
    /// Distinct `group:value` pairs
    pub tags: usize,
    /// Exclusive groups declared in the rules
    pub groups: usize,
    /// `requires` entries naming missing modules
    pub orphaned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub status: DoctorStatus,
    pub modules: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DoctorStats>,
    /// Failed only because warnings were promoted
    #[serde(skip)]
    pub strict_failure: bool,
}

impl DoctorReport {
    /// A report for a pack that could not even be loaded
    pub fn load_failure(message: impl Into<String>) -> Self {
        Self {
            status: DoctorStatus::Failed,
            modules: 0,
            errors: vec![message.into()],
            warnings: Vec::new(),
            stats: None,
            strict_failure: false,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == DoctorStatus::Ok
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            DOCTOR_FAILURE_EXIT_CODE
        }
    }

    /// Human-readable report
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.errors.is_empty() {
            let _ = writeln!(out, "doctor: OK ({} modules)", self.modules);
        } else {
            out.push_str("doctor: FAILED\n");
            push_list(&mut out, "errors", &self.errors);
        }
        push_list(&mut out, "warnings", &self.warnings);
        if self.strict_failure {
            out.push_str("doctor: FAILED (strict mode; warnings treated as errors)\n");
        }

        if let Some(stats) = &self.stats {
            out.push_str("stats:\n");
            let _ = writeln!(out, "  modules: {}", stats.modules);
            let layers: Vec<String> = stats
                .by_layer
                .iter()
                .map(|(layer, n)| format!("{layer}={n}"))
                .collect();
            let _ = writeln!(out, "  by layer: {}", layers.join(" "));
            let _ = writeln!(out, "  unreachable: {}", stats.unreachable);
            let _ = writeln!(out, "  tags: {}", stats.tags);
            let _ = writeln!(out, "  exclusive groups: {}", stats.groups);
            let _ = writeln!(out, "  orphaned requires: {}", stats.orphaned);
        }
        out
    }
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// Load a pack from `source` and check it. Load errors become a failed report.
pub fn diagnose_source<S: ModuleSource + ?Sized>(source: &S, options: DoctorOptions) -> DoctorReport {
    let loaded = source
        .load_registry()
        .and_then(|registry| source.load_rules().map(|rules| (registry, rules)));

    match loaded {
        Ok((registry, rules)) => diagnose(&registry, &rules, options),
        Err(e) => {
            tracing::warn!(error = %e, "prompt pack failed to load");
            DoctorReport::load_failure(e.to_string())
        }
    }
}

/// Check the whole registry against the rules.
pub fn diagnose(
    registry: &ModuleRegistry,
    rules: &RuleSet,
    options: DoctorOptions,
) -> DoctorReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // group -> values seen anywhere
    let mut group_values: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for module in registry.iter() {
        for tag in module.tags() {
            match KeyedTag::parse(tag) {
                Some(parsed) => {
                    group_values
                        .entry(parsed.group)
                        .or_default()
                        .insert(parsed.value);
                }
                None => errors.push(
                    ResolveError::InvalidTag {
                        module: module.id().to_string(),
                        tag: tag.clone(),
                    }
                    .to_string(),
                ),
            }
        }
    }

    let mut orphaned = 0;
    for module in registry.iter() {
        for target in module.requires() {
            if !registry.contains(target) {
                orphaned += 1;
                errors.push(format!(
                    "requires target not found: {} (referenced by {})",
                    target,
                    module.id()
                ));
            }
        }
    }

    if let Some(path) = first_cycle(registry) {
        errors.push(ResolveError::Cycle { path }.to_string());
    }

    if !registry.contains(BASE_ID) {
        errors.push(format!("missing required entrypoint module: {BASE_ID}"));
    }

    if rules.exclusive_groups.is_empty() {
        warnings.push("rules.yml: exclusive_groups is empty".to_string());
    }
    for group in &rules.exclusive_groups {
        if !group_values.contains_key(group.as_str()) {
            warnings.push(format!(
                "exclusive group {group:?} never appears in any module tags"
            ));
        }
    }

    let reachable = reachable_from_entrypoints(registry);
    let dead: Vec<&str> = registry
        .ids()
        .filter(|id| !reachable.contains(*id))
        .collect();
    if !dead.is_empty() {
        warnings.push(format!(
            "unreachable modules ({}): {}",
            dead.len(),
            dead.join(", ")
        ));
    }

    let strict_failure = errors.is_empty() && options.strict && !warnings.is_empty();
    let status = if errors.is_empty() && !strict_failure {
        DoctorStatus::Ok
    } else {
        DoctorStatus::Failed
    };

    let stats = options.stats.then(|| {
        let mut by_layer: BTreeMap<Layer, usize> =
            Layer::ALL.into_iter().map(|layer| (layer, 0)).collect();
        for module in registry.iter() {
            *by_layer.entry(module.layer()).or_default() += 1;
        }
        DoctorStats {
            modules: registry.len(),
            by_layer,
            unreachable: dead.len(),
            tags: group_values.values().map(BTreeSet::len).sum(),
            groups: rules.exclusive_groups.len(),
            orphaned,
        }
    });

    tracing::info!(
        modules = registry.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "doctor finished"
    );

    DoctorReport {
        status,
        modules: registry.len(),
        errors,
        warnings,
        stats,
        strict_failure,
    }
}
