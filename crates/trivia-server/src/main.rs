use clap::Parser;

use trivia_config::TriviaConfig;

/// HTTP server for the trivia question service.
#[derive(Debug, Parser)]
#[command(name = "trivia-server", version, about = "Trivia question service")]
struct Cli {
    /// Override the configured TCP port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the configured bind interface.
    #[arg(short, long)]
    bind: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("trivia-server error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = TriviaConfig::load_with_dotenv()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    if !config.openai.is_configured() {
        tracing::warn!("openai.api_key is not set, generation requests will fail");
    }

    trivia_server::start_server(config).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
