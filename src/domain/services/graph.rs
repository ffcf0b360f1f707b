//! Dependency graph views
//!
//! Reachability from the pack's entrypoints and a Graphviz DOT rendering of the
//! whole registry. Output is byte-stable: clusters follow layer order, nodes and
//! edges are sorted, attributes are always written in the same order.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Write as _;

use crate::domain::entities::ModuleRegistry;
use crate::domain::value_objects::Layer;

/// The always-selected base module id
pub const BASE_ID: &str = "base";

/// Whether `id` can be a root of a compile (`base`, `modes/*`, `contracts/*`)
pub fn is_entrypoint(id: &str) -> bool {
    id == BASE_ID || id.starts_with("modes/") || id.starts_with("contracts/")
}

/// Ids reachable from any entrypoint through existing `requires` targets.
///
/// Missing targets are skipped rather than reported.
pub fn reachable_from_entrypoints(registry: &ModuleRegistry) -> BTreeSet<String> {
    let mut reachable = BTreeSet::new();
    let mut pending: Vec<&str> = registry.ids().filter(|id| is_entrypoint(id)).collect();

    while let Some(id) = pending.pop() {
        if !reachable.insert(id.to_string()) {
            continue;
        }
        if let Some(module) = registry.get(id) {
            pending.extend(
                module
                    .requires()
                    .iter()
                    .map(String::as_str)
                    .filter(|r| registry.contains(r) && !reachable.contains(*r)),
            );
        }
    }
    reachable
}

/// The first requires cycle met scanning ids in sorted order, as
/// `[a, b, a]`. Targets missing from the registry are skipped.
pub fn first_cycle(registry: &ModuleRegistry) -> Option<Vec<String>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Visiting,
        Done,
    }

    let mut marks: HashMap<&str, Mark> = HashMap::new();

    for start in registry.iter() {
        if marks.contains_key(start.id()) {
            continue;
        }
        // (id, sorted existing requires, next child)
        let mut stack: Vec<(&str, Vec<&str>, usize)> = Vec::new();
        marks.insert(start.id(), Mark::Visiting);
        stack.push((start.id(), existing_requires(registry, start.id()), 0));

        while let Some((id, children, next)) = stack.last_mut() {
            let id = *id;
            let Some(child) = children.get(*next).copied() else {
                marks.insert(id, Mark::Done);
                stack.pop();
                continue;
            };
            *next += 1;

            match marks.get(child) {
                Some(Mark::Done) => {}
                Some(Mark::Visiting) => {
                    let begin = stack.iter().position(|(f, _, _)| *f == child).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        stack[begin..].iter().map(|(f, _, _)| f.to_string()).collect();
                    cycle.push(child.to_string());
                    return Some(cycle);
                }
                None => {
                    marks.insert(child, Mark::Visiting);
                    stack.push((child, existing_requires(registry, child), 0));
                }
            }
        }
    }
    None
}

fn existing_requires<'r>(registry: &'r ModuleRegistry, id: &str) -> Vec<&'r str> {
    registry
        .get(id)
        .map(|m| {
            m.sorted_requires()
                .into_iter()
                .filter(|r| registry.contains(r))
                .collect()
        })
        .unwrap_or_default()
}

/// Render the registry as a Graphviz digraph.
pub fn build_dot(registry: &ModuleRegistry, reachable: &BTreeSet<String>) -> String {
    let mut dot = String::new();
    dot.push_str("digraph ppc {\n");
    dot.push_str("  rankdir=LR;\n\n");

    for layer in Layer::ALL {
        let ids: Vec<&str> = registry
            .iter()
            .filter(|m| m.layer() == layer)
            .map(|m| m.id())
            .collect();
        if ids.is_empty() {
            continue;
        }
        let _ = writeln!(dot, "  subgraph cluster_{}_{} {{", layer.index(), layer);
        let _ = writeln!(dot, "    label=\"{}\";", layer);
        for id in ids {
            let _ = writeln!(dot, "    \"{}\";", dot_escape(id));
        }
        dot.push_str("  }\n\n");
    }

    let edges: BTreeSet<(&str, &str)> = registry
        .iter()
        .flat_map(|m| m.requires().iter().map(move |r| (m.id(), r.as_str())))
        .collect();
    for (from, to) in &edges {
        let _ = writeln!(dot, "  \"{}\" -> \"{}\";", dot_escape(from), dot_escape(to));
    }

    dot.push('\n');
    for id in registry.ids().filter(|id| !reachable.contains(*id)) {
        let _ = writeln!(
            dot,
            "  \"{}\" [style=\"dashed\", color=\"red\"];",
            dot_escape(id)
        );
    }

    dot.push('\n');
    for id in registry.ids().filter(|id| is_entrypoint(id)) {
        let _ = writeln!(
            dot,
            "  \"{}\" [shape=\"box\", style=\"bold\"];",
            dot_escape(id)
        );
    }

    dot.push_str("}\n");
    dot
}

/// Quote-safe form of an id inside a DOT `"..."` string.
fn dot_escape(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}
