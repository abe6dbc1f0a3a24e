//! Decilog CLI
//!
//! Command-line interface for decilog

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "decilog")]
#[command(about = "Decilog - personal decision tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Populate the database with sample decisions
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Seed(args) => commands::seed::execute(args),
    }
}
