mod connection;
mod friends;
mod load;
mod menu;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Interactive friend-list and shortest-connection queries over a social
/// network file.
#[derive(Parser)]
#[command(name = "friendnet", version, about)]
struct Cli {
    /// Network file: `<people> <friendships>` followed by one whitespace-
    /// separated id pair per friendship.
    network: PathBuf,

    /// Emit query results as one JSON object per query instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = load::load_network(&cli.network)?;
    menu::run(&graph, cli.json)
}
