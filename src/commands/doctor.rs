use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ppc::application::diagnose_source;
use ppc::domain::services::{build_dot, reachable_from_entrypoints};
use ppc::infrastructure::write_atomic;
use ppc::{Config, DoctorOptions, FsModuleSource, ModuleRegistry, ModuleSource};

#[derive(Debug, Clone, Default)]
pub struct DoctorArgs {
    pub prompts: Option<PathBuf>,
    pub strict: bool,
    pub stats: bool,
    pub graph: bool,
    pub graph_out: Option<PathBuf>,
}

pub fn cmd_doctor(args: &DoctorArgs, config: &Config, json: bool) -> Result<i32> {
    let dir = super::prompts_dir(args.prompts.as_deref(), config);
    let source = FsModuleSource::new(&dir);

    if args.graph || args.graph_out.is_some() {
        if let Ok(registry) = source.load_registry() {
            return write_graph(&registry, args.graph_out.as_deref());
        }
    }

    let report = diagnose_source(
        &source,
        DoctorOptions {
            strict: args.strict,
            stats: args.stats,
        },
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if !report.is_ok() {
        tracing::info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "doctor failed"
        );
    }
    Ok(report.exit_code())
}

fn write_graph(registry: &ModuleRegistry, out: Option<&Path>) -> Result<i32> {
    let reachable = reachable_from_entrypoints(registry);
    let dot = build_dot(registry, &reachable);

    match out {
        Some(path) => {
            write_atomic(path, dot.as_bytes())
                .with_context(|| format!("failed to write graph to {}", path.display()))?;
            tracing::info!(path = %path.display(), "graph written");
        }
        None => print!("{dot}"),
    }
    Ok(0)
}
