mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use registry_core::{Period, ValveFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tavi")]
#[command(version, about = "TAVI procedure registry CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a records file against the registry rules
    Validate {
        /// Path to the records file (JSON array)
        records: String,

        /// Path to a profile file overriding the standard one (YAML or TOML)
        #[arg(short, long)]
        profile: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a profile file and print its configuration
    Check {
        /// Path to the profile file (YAML or TOML)
        profile: String,
    },

    /// List records, optionally filtered
    List {
        /// Path to the records file (JSON array)
        records: String,

        /// Keep records whose patient name or valve model contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Valve type filter: all, balloon, self
        #[arg(long, default_value = "all")]
        valve: ValveFilter,

        /// Period filter: all, 1m, 3m, 6m, 1y
        #[arg(long, default_value = "all")]
        period: Period,
    },

    /// Compute statistics over records, optionally filtered
    Stats {
        /// Path to the records file (JSON array)
        records: String,

        /// Keep records whose patient name or valve model contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Valve type filter: all, balloon, self
        #[arg(long, default_value = "all")]
        valve: ValveFilter,

        /// Period filter: all, 1m, 3m, 6m, 1y
        #[arg(long, default_value = "all")]
        period: Period,

        /// Number of valve models to rank
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            records,
            profile,
            format,
        } => commands::validate::execute(&records, profile.as_deref(), &format),

        Commands::Check { profile } => commands::check::execute(&profile),

        Commands::List {
            records,
            search,
            valve,
            period,
        } => commands::list::execute(&records, search.as_deref(), valve, period),

        Commands::Stats {
            records,
            search,
            valve,
            period,
            top,
            format,
        } => commands::stats::execute(&records, search.as_deref(), valve, period, top, &format),
    }
}
