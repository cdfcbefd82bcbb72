use anyhow::Result;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::config::Config;

pub mod admin;
pub mod config;
pub mod invitation;

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        command,
    } = cli;
    let config_path = config_path.as_deref();

    match command {
        Commands::Config { action } => config::handle_config_command(&action, config_path),
        Commands::Days { events } => {
            invitation::list_days(&load_config(config_path)?, events.as_deref())
        }
        Commands::Day { index } => invitation::show_day(&load_config(config_path)?, index),
        Commands::Invitation => invitation::show_invitation(&load_config(config_path)?),
        Commands::Calendar { day, event, provider } => {
            invitation::calendar_link(&load_config(config_path)?, day, event, provider.into())
        }
        Commands::Map { day } => invitation::map(&load_config(config_path)?, day),
        Commands::Share { events, base } => {
            invitation::share(&load_config(config_path)?, &events, base.as_deref())
        }
        Commands::Whatsapp { contact, events } => {
            invitation::whatsapp(&load_config(config_path)?, contact, &events)
        }
        Commands::Serve { addr } => {
            let config = load_config(config_path)?;
            let addr = addr.unwrap_or_else(|| config.site.listen_addr.clone());
            crate::api_server::start_api_server(config, &addr).await
        }
        Commands::Admin { action } => {
            admin::handle_admin_command(&load_config(config_path)?, action).await
        }
    }
}
