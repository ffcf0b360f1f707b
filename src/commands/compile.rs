use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use ppc::domain::services::Differ;
use ppc::infrastructure::loader::{load_profile, load_profile_file};
use ppc::infrastructure::write_atomic;
use ppc::{
    compile, render_explain, CompileResult, Config, FsModuleSource, ModuleSource, Selection,
    SelectionOverrides,
};

use crate::cli::CompileArgs;
use crate::ui::json::{emit, emit_event, events::*};

/// Exit code when `--check` finds drift
const DRIFT_EXIT_CODE: i32 = 1;

pub fn cmd_compile(args: &CompileArgs, config: &Config, json: bool) -> Result<i32> {
    if !json {
        return run(args, config, false);
    }

    emit_event(&StartEvent::new("compile"))?;
    let outcome = run(args, config, true);
    let complete = match &outcome {
        Ok(0) => CompleteEvent::success("compile"),
        _ => CompleteEvent::failure("compile"),
    };
    emit_event(&complete)?;
    outcome
}

fn run(args: &CompileArgs, config: &Config, json: bool) -> Result<i32> {
    let selection = build_selection(args, config)?;
    let dir = super::prompts_dir(args.prompts.as_deref(), config);
    let source = FsModuleSource::new(&dir);
    let registry = source
        .load_registry()
        .with_context(|| format!("failed to load modules from {}", dir.display()))?;
    let rules = source.load_rules()?;

    let request = selection.to_request(&config.vars);
    tracing::info!(roots = ?request.root_ids, "compiling");
    let result = compile(&registry, &rules, &request)?;

    if args.explain {
        eprint!("{}", render_explain(&result, &registry));
    }

    let output = result.output(args.hash || config.hash_header);

    let code = match &args.check {
        Some(path) => check_drift(path, &output, json)?,
        None => {
            if let Some(path) = &args.out {
                write_atomic(path, output.as_bytes())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "output written");
            }
            if json {
                emit_result(&result, args.out.as_deref())?;
            } else {
                print!("{output}");
            }
            0
        }
    };

    Ok(code)
}

fn build_selection(args: &CompileArgs, config: &Config) -> Result<Selection> {
    let vars = args.vars.iter().cloned().collect();

    let profile = match (&args.profile, &args.profile_file) {
        (Some(name), _) => Some(load_profile(&config.profiles_dir, name)?),
        (None, Some(path)) => Some(load_profile_file(path)?),
        (None, None) => None,
    };

    if let Some(profile) = profile {
        let overrides = SelectionOverrides {
            mode: args.mode.clone(),
            contract: args.contract.clone(),
            revisions: args.revisions,
            traits: args.trait_ids(),
            vars,
        };
        return Ok(Selection::from_profile(&profile, overrides));
    }

    let mode = args
        .mode
        .clone()
        .context("a mode is required unless --profile or --profile-file is given")?;
    let contract = args
        .contract
        .clone()
        .unwrap_or_else(|| config.contract.clone());

    let mut selection = Selection::new(mode, contract);
    for id in args.trait_ids() {
        selection = selection.with_trait(id);
    }
    if let Some(n) = args.revisions {
        selection = selection.with_revisions(n);
    }
    selection.vars = vars;
    Ok(selection)
}

/// Compare `output` with the file at `path`. A missing file counts as drift.
fn check_drift(path: &Path, output: &str, json: bool) -> Result<i32> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };

    let label = path.display().to_string();
    let diff = Differ::new().diff(&label, &existing, output);

    if json {
        emit(serde_json::json!({
            "event": "check",
            "command": "compile",
            "file": label,
            "drift": diff.has_changes(),
            "additions": diff.additions,
            "deletions": diff.deletions,
        }))?;
    } else if diff.has_changes() {
        print!("{}", diff.unified);
        eprintln!("drift detected in {label} ({})", diff.summary());
    } else {
        eprintln!("{label}: up to date");
    }

    Ok(if diff.has_changes() { DRIFT_EXIT_CODE } else { 0 })
}

fn emit_result(result: &CompileResult, out: Option<&Path>) -> Result<()> {
    emit(serde_json::json!({
        "event": "compiled",
        "command": "compile",
        "hash": result.hash.prefixed(),
        "roots": result.meta.root_ids,
        "final_order": result.meta.final_order,
        "out": out.map(|p| p.display().to_string()),
        "document": result.document,
    }))?;
    Ok(())
}
