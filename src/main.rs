use clap::{Parser, Subcommand};

use roster_rs::config::ConfigLoader;
use roster_rs::logger::init_logger;
use roster_rs::server::Server;

#[derive(Parser)]
#[command(name = "roster-rs", version, about = "Token-guarded user account CRUD service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Run pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = ConfigLoader::new()?.load()?;
    init_logger(&settings.logger)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => Server::new(settings).run().await,
        Command::Migrate => {
            roster_rs::db::run_pending_migrations(&settings.database.url).await?;
            tracing::info!("Migrations complete");
            Ok(())
        }
    }
}
