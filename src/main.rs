use clap::Parser;
use tidy_adapter::cli::{self, Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("tidy_adapter=debug")
    } else {
        EnvFilter::new("tidy_adapter=warn")
    };

    // Diagnostics go to stdout, logs stay on stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check(args) => cli::check::execute(args).await,
        Commands::Parse(args) => cli::parse::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
