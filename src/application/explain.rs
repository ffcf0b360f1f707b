//! Explain report for a finished compile

use std::fmt::Write as _;

use crate::domain::entities::ModuleRegistry;

use super::compiler::CompileResult;

/// How a compile arrived at its document: roots, closure, final order.
pub fn render_explain(result: &CompileResult, registry: &ModuleRegistry) -> String {
    let meta = &result.meta;
    let mut out = String::from("PPC explain\n");

    out.push_str("Selected IDs:\n");
    let mut selected: Vec<&str> = meta.root_ids.iter().map(String::as_str).collect();
    selected.sort_unstable();
    selected.dedup();
    for id in selected {
        let _ = writeln!(out, "  - {id}");
    }

    out.push_str("Closure IDs (after requires):\n");
    let mut closure: Vec<&str> = meta.closure_ids.iter().map(String::as_str).collect();
    closure.sort_unstable();
    for id in closure {
        let _ = writeln!(out, "  - {id}{}", required_note(meta.is_required_only(id)));
    }

    out.push_str("Final order:\n");
    for id in &meta.final_order {
        let Some(module) = registry.get(id) else {
            continue;
        };
        let _ = writeln!(
            out,
            "  - [{}] {} prio={}{}",
            module.layer().index(),
            id,
            module.priority(),
            required_note(meta.is_required_only(id))
        );
    }
    out
}

fn required_note(required: bool) -> &'static str {
    if required {
        " (required)"
    } else {
        ""
    }
}
