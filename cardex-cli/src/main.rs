use std::path::PathBuf;

use clap::Parser;

/// Default port: the PORT environment variable when it holds a usable
/// value, 3000 otherwise.
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

#[derive(Parser)]
#[command(name = "cardex", about = "Read-only car catalog HTTP API")]
struct Cli {
    /// Port to listen on (defaults to $PORT, then 3000)
    #[arg(long, default_value_t = default_port())]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to an external dataset snapshot (defaults to the bundled one)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Directory containing the served image
    #[arg(long, default_value = "img")]
    image_dir: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Some(path) = &cli.data {
        tracing::debug!("using dataset snapshot at {}", path.display());
    }

    cardex_core::server::run_server(cli.data.as_deref(), cli.image_dir, cli.port, &cli.host)
        .await?;

    Ok(())
}
