//! Pokedex CLI
//!
//! Interactive command-line Pokedex over PokeAPI. Responses are cached in
//! memory for a short window so repeated commands skip the network.

use std::io::Write as _;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pokedex_api::{PokeApiClient, PokeApiConfig};
use pokedex_core::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_HTTP_TIMEOUT_SECS, POKEAPI_BASE_URL,
};

mod commands;
mod session;

use commands::{dispatch, ReplAction};
use session::Session;

/// Pokedex - interactive PokeAPI explorer
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seconds an API response stays cached
    #[arg(long, default_value_t = DEFAULT_CACHE_TTL_SECS)]
    cache_ttl: u64,

    /// Seconds before an API request times out
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout: u64,

    /// Alternate API base URL
    #[arg(long, env = "POKEAPI_BASE_URL", hide = true, default_value = POKEAPI_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "pokedex=debug,pokedex_api=debug,pokedex_cache=debug,info"
    } else {
        "pokedex=info,pokedex_api=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PokeApiConfig::new(cli.base_url)
        .with_cache_ttl(cli.cache_ttl)
        .with_timeout(cli.timeout);
    tracing::debug!(
        cache_ttl = config.cache_ttl_seconds,
        timeout = config.timeout_seconds,
        "client configured"
    );
    let client = PokeApiClient::with_config(config);
    let mut session = Session::new();

    println!("{}", "Welcome to the Pokedex!".cyan().bold());
    println!("Type {} to see the available commands.\n", "help".yellow());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        // EOF behaves like `exit`.
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match dispatch(&client, &mut session, &line).await {
            Ok(ReplAction::Continue) => {}
            Ok(ReplAction::Exit) => break,
            Err(err) => eprintln!("{} {err:#}", "error:".red().bold()),
        }
    }

    // Deterministic teardown of the cache reaper before exiting.
    client.shutdown().await;
    println!("{}", "Closing the Pokedex... Goodbye!".cyan());

    Ok(())
}
