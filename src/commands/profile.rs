//! `gymlog profile ...`

use anyhow::Result;
use serde_json::json;

use gymlog::presentation::factory;

use super::Context;
use crate::cli::ProfileCommand;
use crate::ui::output::emit_json;

pub fn cmd_profile(ctx: &Context, action: ProfileCommand) -> Result<()> {
    let profiles = factory::create_profiles_use_case(&ctx.config);

    match action {
        ProfileCommand::Create { name } => {
            let profile = profiles.create(&name)?;
            if ctx.json {
                return emit_json(&profile);
            }
            println!("✓ Created profile '{}' ({})", profile.name, profile.id);
        }
        ProfileCommand::List => {
            let list = profiles.list();
            let active = profiles.active_id();
            if ctx.json {
                return emit_json(&json!({ "profiles": list, "active": active }));
            }
            if list.is_empty() {
                println!("No profiles yet. Create one with 'gymlog profile create <name>'.");
            }
            for profile in &list {
                let marker = if profile.id == active { "*" } else { " " };
                println!(
                    "{} {:<24} {}  {}",
                    marker,
                    profile.name,
                    profile.id,
                    profile.created_at.format("%Y-%m-%d")
                );
            }
        }
        ProfileCommand::Use { profile } => {
            let profile = profiles.switch(&profile)?;
            if ctx.json {
                return emit_json(&profile);
            }
            println!("✓ Switched to '{}'", profile.name);
        }
        ProfileCommand::Delete { profile } => {
            let profile = profiles.delete(&profile)?;
            if ctx.json {
                return emit_json(&profile);
            }
            println!("✓ Deleted profile '{}'", profile.name);
        }
        ProfileCommand::Current => {
            let active = profiles.active();
            if ctx.json {
                return emit_json(&active);
            }
            match active {
                Some(profile) => println!("{} ({})", profile.name, profile.id),
                None => println!("No active profile."),
            }
        }
        ProfileCommand::SignOut => {
            let previous = profiles.active();
            profiles.sign_out()?;
            if ctx.json {
                return emit_json(&json!({ "signed_out": previous }));
            }
            match previous {
                Some(profile) => println!("✓ Signed out of '{}'", profile.name),
                None => println!("No active profile."),
            }
        }
    }

    Ok(())
}
