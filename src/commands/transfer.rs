//! `gymlog export`, `gymlog import`, `gymlog reset`

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::json;

use gymlog::export_file_name;
use gymlog::presentation::factory;

use super::Context;
use crate::ui::output::emit_json;

pub fn cmd_export(ctx: &Context, out: Option<&Path>) -> Result<()> {
    let store = ctx.read_store();
    let document = store.export_json()?;

    let Some(out) = out else {
        println!("{}", document);
        return Ok(());
    };

    let target = if out.is_dir() {
        let name = factory::create_profiles_use_case(&ctx.config)
            .active()
            .map(|p| p.name)
            .unwrap_or_default();
        out.join(export_file_name(&name))
    } else {
        out.to_path_buf()
    };

    fs::write(&target, document)
        .with_context(|| format!("failed to write {}", target.display()))?;

    if ctx.json {
        return emit_json(&json!({
            "path": target.display().to_string(),
            "workouts": store.workouts().len(),
        }));
    }
    println!(
        "✓ Exported {} workouts to {}",
        store.workouts().len(),
        target.display()
    );
    Ok(())
}

pub fn cmd_import(ctx: &Context, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let mut store = ctx.write_store()?;
    let count = store.import_json(&text)?;

    if ctx.json {
        return emit_json(&json!({ "imported": count }));
    }
    println!("✓ Imported {} workouts", count);
    Ok(())
}

pub fn cmd_reset(ctx: &Context, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("reset deletes every workout of the active profile; pass --yes to confirm");
    }

    let mut store = ctx.write_store()?;
    let removed = store.workouts().len();
    store.reset();

    if ctx.json {
        return emit_json(&json!({ "removed": removed }));
    }
    println!("✓ Removed {} workouts", removed);
    Ok(())
}
