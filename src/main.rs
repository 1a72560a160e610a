use anyhow::Result;
use clap::{Parser, Subcommand};

/// magnus - event budgeting and catering operations backend
#[derive(Parser)]
#[command(name = "magnus")]
#[command(about = "Event budgets, catering logistics and workflow automation", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = magnus::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    magnus::observability::init_observability(
        "magnus",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => magnus::cli::serve(config, host, port).await,
        Commands::Migrate => magnus::migrate::migrate(&config).await,
        Commands::Reset => magnus::migrate::reset(&config).await,
    }
}
