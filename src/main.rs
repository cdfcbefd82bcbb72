use anyhow::Result;
use clap::Parser;
use log::error;

use vivah::cli::Cli;
use vivah::config::load_env_file;

#[tokio::main]
async fn main() -> Result<()> {
    load_env_file();
    vivah::init_logger();

    let cli = Cli::parse();
    if let Err(e) = vivah::run(cli).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
