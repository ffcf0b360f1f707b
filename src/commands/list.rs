use std::path::Path;

use anyhow::{Context, Result};
use ppc::{Config, FsModuleSource, ModuleSource};

use crate::ui::json::{emit_event, events::*};

const ID_WIDTH: usize = 22;

pub fn cmd_list(prompts: Option<&Path>, config: &Config, json: bool) -> Result<i32> {
    let dir = super::prompts_dir(prompts, config);
    let registry = FsModuleSource::new(&dir)
        .load_registry()
        .with_context(|| format!("failed to load modules from {}", dir.display()))?;

    if json {
        emit_event(&StartEvent::new("list"))?;
        for module in registry.iter() {
            emit_event(&DataEvent::new(
                "list",
                serde_json::json!({
                    "id": module.id(),
                    "layer": module.layer(),
                    "priority": module.priority(),
                    "desc": module.description(),
                }),
            ))?;
        }
        emit_event(&CompleteEvent::success("list"))?;
        return Ok(0);
    }

    for module in registry.iter() {
        let desc = module
            .description()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or("(no desc)");
        println!("{:<width$}  {}", module.id(), desc, width = ID_WIDTH);
    }
    Ok(0)
}
