// Repochat - chat with any GitHub repository
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;

use repochat::cli::Repl;
use repochat::config::constants::DEFAULT_SERVER_URL;
use repochat::config::load_config;
use repochat::server::AppServer;
use repochat::session::HttpBackend;

#[derive(Parser)]
#[command(name = "repochat")]
#[command(about = "Ask questions about any GitHub repository", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Bind address (overrides config and REPOCHAT_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Interactive terminal client for a running server
    Chat {
        /// Server base URL
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The chat client keeps quiet unless asked; RUST_LOG always wins.
    let default_filter = match cli.command {
        Commands::Serve { .. } => "info",
        Commands::Chat { .. } => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { bind } => {
            let mut config = load_config()?;
            if let Some(bind) = bind {
                config.bind_address = bind;
                config.validate()?;
            }
            AppServer::new(config)?.serve().await
        }
        Commands::Chat { server } => {
            let config = load_config()?;
            let backend =
                HttpBackend::new(server, Duration::from_secs(config.request_timeout_secs))?;
            Repl::new(backend)?.run().await
        }
    }
}
