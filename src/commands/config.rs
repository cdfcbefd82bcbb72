use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::ConfigActions;
use crate::config::{resolve_config_path, Config};

/// `--config` when given, otherwise the file every other command reads.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => resolve_config_path(),
    }
}

pub fn handle_config_command(action: &ConfigActions, explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit)?;

    match action {
        ConfigActions::Show => {
            let config = Config::load_from(&path)?;
            println!("\nCurrent Configuration ({}):", path.display());
            println!("\nSite:");
            println!("  Base URL: {}", config.site.base_url);
            println!("  Listen Address: {}", config.site.listen_addr);
            println!("\nBackend:");
            println!("  URL: {}", config.backend.url.as_deref().unwrap_or("None"));
            println!(
                "  Key: {}",
                if config.backend.anon_key.is_some() { "Set" } else { "Not set" }
            );
            println!("\nWedding:");
            println!("  Couple: {}", config.wedding.couple());
            println!("  Date: {}", config.wedding.wedding_date);
            println!("  Event Days: {}", config.wedding.event_days.len());
            Ok(())
        }
        ConfigActions::Init { force } => {
            if path.exists() && !force {
                println!("Config already exists at {} (use --force to overwrite)", path.display());
                return Ok(());
            }
            let written = match explicit {
                Some(path) => {
                    Config::default()
                        .save_to(path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    path.to_path_buf()
                }
                None => Config::default().save()?,
            };
            println!("✅ Default configuration written to {}", written.display());
            Ok(())
        }
        ConfigActions::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
