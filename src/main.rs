use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_cli::Session;
use rookery_game::GameConfig;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only session output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("rookery starting");

    let mut session = Session::new(GameConfig::default(), io::stdout());
    session.run(io::stdin().lock())?;
    Ok(())
}
