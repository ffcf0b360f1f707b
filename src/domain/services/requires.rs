//! Requires expander
//!
//! Computes the transitive closure of `requires` edges from a root selection.
//!
//! Traversal is a depth-first walk driven by an explicit stack of frames rather
//! than recursion. Roots are visited in lexicographic order and so are each
//! module's requirements, which makes `order` (first-completion post-order)
//! identical run over run regardless of how the caller listed the roots.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::domain::entities::{Module, ModuleRegistry};
use crate::error::ResolveError;

/// How a module entered the closure of one compile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Provenance {
    /// The id was one of the request's roots
    pub selected: bool,
    /// The id is only present because another module requires it
    pub from_requirement: bool,
}

/// Result of expanding a root selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    /// Every reachable id, each exactly once, in first-completion order
    pub order: Vec<String>,
    /// Per-id provenance, scoped to this expansion
    pub provenance: BTreeMap<String, Provenance>,
}

impl Closure {
    pub fn contains(&self, id: &str) -> bool {
        self.provenance.contains_key(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Visiting,
    Done,
}

/// One module on the current DFS path, with its requirements still to visit
struct Frame<'r> {
    id: &'r str,
    children: Vec<&'r str>,
    next: usize,
}

impl<'r> Frame<'r> {
    fn new(module: &'r Module) -> Self {
        Self {
            id: module.id(),
            children: module.sorted_requires(),
            next: 0,
        }
    }
}

/// Expand `root_ids` to their full requires closure.
///
/// Aborts on the first missing module or cycle met while walking roots in
/// sorted order.
pub fn expand_requires<S: AsRef<str>>(
    root_ids: &[S],
    registry: &ModuleRegistry,
) -> Result<Closure, ResolveError> {
    let roots: BTreeSet<&str> = root_ids.iter().map(AsRef::as_ref).collect();

    let mut state: HashMap<&str, VisitState> = HashMap::new();
    let mut path: Vec<Frame<'_>> = Vec::new();
    let mut order: Vec<String> = Vec::new();

    for &root in &roots {
        let module = registry
            .get(root)
            .ok_or_else(|| ResolveError::UnknownRoot {
                id: root.to_string(),
            })?;
        if state.contains_key(module.id()) {
            continue;
        }

        state.insert(module.id(), VisitState::Visiting);
        path.push(Frame::new(module));

        while let Some(frame) = path.last_mut() {
            let parent = frame.id;
            let Some(child) = frame.children.get(frame.next).copied() else {
                state.insert(parent, VisitState::Done);
                order.push(parent.to_string());
                path.pop();
                continue;
            };
            frame.next += 1;

            match state.get(child) {
                Some(VisitState::Done) => {}
                Some(VisitState::Visiting) => {
                    return Err(ResolveError::Cycle {
                        path: cycle_path(&path, child),
                    });
                }
                None => {
                    let module =
                        registry
                            .get(child)
                            .ok_or_else(|| ResolveError::MissingRequirement {
                                missing: child.to_string(),
                                required_by: parent.to_string(),
                            })?;
                    state.insert(module.id(), VisitState::Visiting);
                    path.push(Frame::new(module));
                }
            }
        }
    }

    let provenance = order
        .iter()
        .map(|id| {
            let selected = roots.contains(id.as_str());
            (
                id.clone(),
                Provenance {
                    selected,
                    from_requirement: !selected,
                },
            )
        })
        .collect();

    tracing::debug!(
        roots = roots.len(),
        closure = order.len(),
        "expanded requires closure"
    );

    Ok(Closure { order, provenance })
}

/// The ids from the first occurrence of `repeated` on the path, closed by `repeated` again.
fn cycle_path(path: &[Frame<'_>], repeated: &str) -> Vec<String> {
    let start = path.iter().position(|f| f.id == repeated).unwrap_or(0);
    path[start..]
        .iter()
        .map(|f| f.id.to_string())
        .chain(std::iter::once(repeated.to_string()))
        .collect()
}
