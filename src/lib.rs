pub mod admin;
pub mod api_server;
pub mod calendar;
pub mod cli;
pub mod commands;
pub mod config;
pub mod image;
pub mod links;
pub mod presentation;
pub mod share;
pub mod theme;
pub mod wedding;

use anyhow::Result;
use env_logger::Env;
use log::info;

/// Run a parsed command line against the loaded configuration.
pub async fn run(cli: cli::Cli) -> Result<()> {
    info!("Running vivah {}", env!("CARGO_PKG_VERSION"));
    commands::run(cli).await
}

pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use calendar::{CalendarEntry, CalendarProvider};
pub use config::Config;
pub use presentation::{
    present_day, present_invitation, present_wedding, DayView, EventView, InvitationView,
};
pub use share::{share_link, EventFilter, ShareSelection};
pub use theme::{resolve_theme, Theme, ThemeKind};
pub use wedding::{Event, EventDay, WeddingData};
