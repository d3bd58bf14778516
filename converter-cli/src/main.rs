//! # fxconv
//!
//! Command-line host for the two-slot currency converter:
//! - Load configuration from arguments and environment
//! - Pick the HTTP or hardcoded rate source
//! - Drive a converter one-shot or interactively

mod config;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_types::{RateSource, SlotIndex};
use rates_client::DEFAULT_RATES_URL;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "fxconv")]
#[command(author, version, about = "Two-slot currency converter", long_about = None)]
struct Cli {
    /// URL of the latest-rates endpoint
    #[arg(long, env = "FX_RATES_URL", default_value = DEFAULT_RATES_URL)]
    rates_url: String,

    /// Currency of the first slot
    #[arg(long, env = "FX_BASE_CURRENCY", default_value = "USD")]
    base: String,

    /// Currency of the second slot
    #[arg(long, env = "FX_TARGET_CURRENCY", default_value = "INR")]
    target: String,

    /// Use the built-in rate table instead of the network
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the rate table
    Rates,
    /// Convert one amount and exit
    Convert {
        /// Amount in the source currency
        amount: String,
        /// Source currency (defaults to --base)
        #[arg(long)]
        from: Option<String>,
        /// Target currency (defaults to --target)
        #[arg(long)]
        to: Option<String>,
    },
    /// Start an interactive session
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only results.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,converter_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rates => {
            let config = Config::new(&cli.rates_url, &cli.base, &cli.target, cli.offline)?;
            let table = config.rate_source().fetch().await?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }

        Commands::Convert { amount, from, to } => {
            let base = from.unwrap_or(cli.base);
            let target = to.unwrap_or(cli.target);
            let config = Config::new(&cli.rates_url, &base, &target, cli.offline)?;
            tracing::info!(from = %config.base, to = %config.target, "Converting");

            let mut converter = config.converter()?;
            converter.refresh(config.rate_source().as_ref()).await?;
            if let Some(table) = converter.rates() {
                for code in [&config.base, &config.target] {
                    if !table.contains(code) {
                        anyhow::bail!("Unknown currency: {}", code);
                    }
                }
            }
            converter.edit_amount(SlotIndex::First, amount.trim())?;

            let pair = converter.pair();
            println!("{} = {}", pair.first(), pair.second());
        }

        Commands::Interactive => {
            let config = Config::new(&cli.rates_url, &cli.base, &cli.target, cli.offline)?;
            tracing::info!(
                base = %config.base,
                target = %config.target,
                offline = config.offline,
                "Starting interactive session"
            );

            let mut converter = config.converter()?;
            let source = config.rate_source();
            session::run(&mut converter, source.as_ref()).await?;
        }
    }

    Ok(())
}
