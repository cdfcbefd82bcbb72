use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::admin::{AdminDraft, AdminPanel, Credentials, SupabaseClient};
use crate::cli::AdminActions;
use crate::config::Config;

fn print_draft(draft: &AdminDraft) {
    let invitation = &draft.invitation;
    println!(
        "Invitation {}",
        invitation.id.as_deref().unwrap_or("(not saved yet)")
    );
    println!("  Couple: {} & {}", invitation.groom_name, invitation.bride_name);
    println!("  Wedding Date: {}", invitation.wedding_date);
    if !invitation.wedding_hashtag.is_empty() {
        println!("  Hashtag: {}", invitation.wedding_hashtag);
    }
    println!("\nEvents:");
    for event in &draft.events {
        println!(
            "  {}. {} - {} {} ({:?})",
            event.display_order + 1,
            event.name,
            event.date,
            event.time,
            event.side
        );
        if !event.venue.is_empty() {
            println!("     Venue: {}", event.venue);
        }
    }
}

fn read_draft(file: &Path) -> Result<AdminDraft> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&content).context("Failed to parse invitation file")
}

pub async fn handle_admin_command(config: &Config, action: AdminActions) -> Result<()> {
    let panel = AdminPanel::new(SupabaseClient::from_config(&config.backend)?);
    let credentials = Credentials::from_env()?;

    if let AdminActions::Signup = action {
        panel.sign_up(&credentials).await?;
        println!("✅ Account created for {}. You can now sign in.", credentials.email);
        return Ok(());
    }

    let session = panel.sign_in(&credentials).await?;

    let result: Result<()> = async {
        match action {
            AdminActions::Show => print_draft(&panel.load(&session).await?),
            AdminActions::Export { file } => {
                let draft = panel.load(&session).await?;
                fs::write(&file, serde_json::to_string_pretty(&draft)?)
                    .with_context(|| format!("Failed to write {}", file.display()))?;
                println!("✅ Invitation exported to {}", file.display());
            }
            AdminActions::Save { file } => {
                let mut draft = read_draft(&file)?;
                panel.save(&session, &mut draft).await?;
                // keep the file in sync with the server-issued id
                fs::write(&file, serde_json::to_string_pretty(&draft)?)?;
                println!("✅ Invitation saved successfully!");
                print_draft(&draft);
            }
            AdminActions::Signup => {}
        }
        Ok(())
    }
    .await;

    if let Err(e) = panel.sign_out(&session).await {
        log::warn!("Sign-out failed: {}", e);
    }

    result
}
