use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::calendar::CalendarProvider;

/// Vivah - themed wedding invitation links, previews and admin tools
#[derive(Debug, Parser)]
#[command(name = "vivah")]
#[command(about = "Themed wedding invitation links, previews and admin tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every event day with its theme and links
    #[command(alias = "list")]
    Days {
        /// Only show these day ids (comma separated)
        #[arg(long)]
        events: Option<String>,
    },

    /// Show the detail view of one event day
    Day {
        /// Zero-based day index
        index: usize,
    },

    /// Show the invitation card and RSVP contacts
    #[command(alias = "card")]
    Invitation,

    /// Print an add-to-calendar link for one event
    Calendar {
        /// Zero-based day index
        day: usize,

        /// Zero-based event index within the day
        #[arg(default_value_t = 0)]
        event: usize,

        #[arg(long, value_enum, default_value_t = ProviderArg::Google)]
        provider: ProviderArg,
    },

    /// Print the map link for a day's venue
    Map {
        /// Zero-based day index
        day: usize,
    },

    /// Build a share link for a selection of event days
    Share {
        /// Day ids to include (comma separated)
        #[arg(long, value_delimiter = ',')]
        events: Vec<String>,

        /// Origin to share (defaults to site.base_url)
        #[arg(long)]
        base: Option<String>,
    },

    /// Print WhatsApp links
    #[command(alias = "wa")]
    Whatsapp {
        /// Direct contact link instead of an invitation share
        #[arg(long)]
        contact: bool,

        /// Day ids to include in the shared invitation link
        #[arg(long, value_delimiter = ',')]
        events: Vec<String>,
    },

    /// Run the JSON API server
    Serve {
        /// Address to bind (defaults to site.listen_addr)
        #[arg(long)]
        addr: Option<String>,
    },

    /// View or write configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },

    /// Manage the invitation stored in the backend
    Admin {
        #[command(subcommand)]
        action: AdminActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file location
    Path,
}

#[derive(Debug, Subcommand)]
pub enum AdminActions {
    /// Create the admin account
    Signup,

    /// Print the stored invitation and events
    Show,

    /// Write the stored invitation and events to a JSON file for editing
    Export {
        file: PathBuf,
    },

    /// Save an invitation JSON file (as produced by export) to the backend
    Save {
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProviderArg {
    Google,
    /// ICS data URI (Apple Calendar, Outlook)
    Ics,
}

impl From<ProviderArg> for CalendarProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Google => CalendarProvider::Google,
            ProviderArg::Ics => CalendarProvider::Ics,
        }
    }
}
