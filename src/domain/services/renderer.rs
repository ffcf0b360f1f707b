//! Document renderer
//!
//! Substitutes `{{name}}` placeholders and joins module bodies into the
//! canonical document: bodies separated by one blank line, no trailing blank
//! lines, exactly one `\n` at the end.

use std::collections::BTreeMap;

use crate::domain::entities::Module;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{name}}` with `vars[name]`.
///
/// Single pass, left to right: inserted values are never rescanned.
/// Placeholders whose name is not in `vars` are kept verbatim.
pub fn substitute_vars(body: &str, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let inner = &rest[start + OPEN.len()..];

        let Some(end) = inner.find(CLOSE) else {
            rest = &rest[start..];
            break;
        };

        match vars.get(&inner[..end]) {
            Some(value) => {
                out.push_str(value);
                rest = &inner[end + CLOSE.len()..];
            }
            None => {
                // keep one brace and rescan, so `{{{{x}}}}` still reaches `{{x}}`
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render modules (already in final order) into the canonical document.
pub fn render<'a, I>(modules: I, vars: &BTreeMap<String, String>) -> String
where
    I: IntoIterator<Item = &'a Module>,
{
    let bodies: Vec<String> = modules
        .into_iter()
        .map(|m| {
            let mut body = substitute_vars(m.body(), vars);
            let trimmed = body.trim_end_matches('\n').len();
            body.truncate(trimmed);
            body
        })
        .collect();

    let joined = bodies.join("\n\n");
    let mut document = joined.trim_end_matches('\n').to_string();
    document.push('\n');
    document
}
