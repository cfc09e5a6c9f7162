//! ytincome CLI - YouTube channel advertising income calculator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod display;

use display::{Format, RateArgs};

#[derive(Parser)]
#[command(name = "ytincome")]
#[command(about = "Estimate YouTube channel advertising income", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output and warnings)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// YouTube Data API base URL
    #[arg(long, env = "YTINCOME_API_BASE", global = true)]
    api_base: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a channel's advertising income
    Estimate {
        /// Channel id, @handle or name. Prompted for when omitted.
        query: Option<String>,

        #[command(flatten)]
        rates: RateArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Compare the estimated income of two or three channels
    Compare {
        /// Channel ids, @handles or names
        #[arg(required = true, num_args = 2..=3)]
        queries: Vec<String>,

        #[command(flatten)]
        rates: RateArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Estimate income from a view count and creation date, without the API
    Calc {
        /// Lifetime view count
        #[arg(long)]
        views: u64,

        /// Channel creation date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        published_at: String,

        #[command(flatten)]
        rates: RateArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// List niche rate presets
    Niches,

    /// List popular channels to try
    Popular,
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the flag-derived level.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let api = commands::ApiOptions {
        api_key: cli.api_key,
        api_base: cli.api_base,
    };

    match command {
        Commands::Estimate {
            query,
            rates,
            format,
        } => commands::estimate::estimate(&api, query, &rates, format, cli.quiet).await,
        Commands::Compare {
            queries,
            rates,
            format,
        } => commands::compare::compare(&api, &queries, &rates, format, cli.quiet).await,
        Commands::Calc {
            views,
            published_at,
            rates,
            format,
        } => commands::calc::calc(views, &published_at, &rates, format),
        Commands::Niches => commands::niches::list_niches(),
        Commands::Popular => commands::popular::list_popular(),
    }
}
