mod cli;

use crate::cli::app::App;
use anyhow::Result;
use clap::Parser;
use nestkv::{ListFormat, ShellConfig};
use tracing_subscriber::EnvFilter;

/// Interactive key-value store with nested transactions
#[derive(Parser, Debug)]
#[command(name = "nestkv", version, about)]
struct Args {
    /// Prompt printed before each command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Skip the welcome banner and the startup help
    #[arg(short, long)]
    quiet: bool,

    /// Output format for LIST
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    list_format: ListFormat,

    /// Log filter for diagnostics written to stderr (e.g. "debug", "nestkv=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ShellConfig::new()
        .prompt(&args.prompt)
        .list_format(args.list_format);
    if args.quiet {
        config = config.quiet();
    }

    let mut app = App::new(config);
    app.run().await?;
    Ok(())
}
