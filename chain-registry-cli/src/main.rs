//! Chain registry CLI.
//!
//! Inspects the built-in network registry and checks that its RPC endpoints
//! are reachable and serve the expected chain.
//!
//! # Usage
//!
//! ```bash
//! # List selectable mainnets (add --include-testnets for the rest)
//! chain-registry list
//!
//! # Print the network definition of a chain, by ID or slug
//! chain-registry show etherlink
//!
//! # Print EIP-3085 wallet_addEthereumChain parameters
//! chain-registry wallet-params 128123
//!
//! # Probe every mainnet using RPC overrides from config.toml
//! chain-registry probe --config config.toml
//!
//! # Probe one chain through a custom RPC endpoint
//! chain-registry probe --chain 42793 --rpc https://my-rpc.example.com
//! ```

use std::path::PathBuf;

use anyhow::{Result, bail};
use chain_registry::default_registry;
use chain_registry_cli::config::Config;
use chain_registry_cli::{chains, probe};
use clap::{Parser, Subcommand};

/// Chain registry inspection and RPC health checks.
#[derive(Debug, Parser)]
#[command(name = "chain-registry", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// List supported chains.
    List {
        /// Include testnet chains.
        #[arg(long)]
        include_testnets: bool,
    },

    /// Print a chain's network definition as JSON.
    Show {
        /// Chain ID or slug.
        chain: String,
    },

    /// Print EIP-3085 `wallet_addEthereumChain` parameters as JSON.
    WalletParams {
        /// Chain ID or slug.
        chain: String,
    },

    /// Check that RPC endpoints answer with the expected chain ID.
    Probe {
        /// Probe only this chain (ID or slug).
        /// If omitted, all supported mainnets are probed.
        #[arg(long)]
        chain: Option<String>,

        /// Probe this RPC endpoint instead of the configured ones.
        /// Only valid when `--chain` is also specified.
        #[arg(long)]
        rpc: Option<String>,

        /// Include testnet chains.
        #[arg(long)]
        include_testnets: bool,

        /// Path to the RPC override file.
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { include_testnets } => cmd_list(include_testnets),
        Command::Show { chain } => {
            let chain = chains::resolve(default_registry(), &chain)?;
            print_json(&chain.definition())
        }
        Command::WalletParams { chain } => {
            let chain = chains::resolve(default_registry(), &chain)?;
            print_json(&chain.add_ethereum_chain_parameter())
        }
        Command::Probe {
            chain,
            rpc,
            include_testnets,
            config,
        } => cmd_probe(chain.as_deref(), rpc, include_testnets, &config).await,
    }
}

/// Pretty-print a value as JSON on stdout.
#[allow(clippy::print_stdout)]
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Execute the `list` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_list(include_testnets: bool) -> Result<()> {
    let targets = chains::targets(default_registry(), None, include_testnets)?;

    println!(
        "{:<12} {:<24} {:<8} {:<8} RPC",
        "Chain ID", "Name", "Type", "Token"
    );
    println!("{}", "-".repeat(90));

    for chain in targets {
        let net_type = if chain.is_testnet { "test" } else { "main" };
        println!(
            "{:<12} {:<24} {:<8} {:<8} {}",
            chain.chain_id, chain.name, net_type, chain.native_token, chain.rpc.main,
        );
    }
    Ok(())
}

/// Execute the `probe` subcommand.
async fn cmd_probe(
    chain_filter: Option<&str>,
    rpc_override: Option<String>,
    include_testnets: bool,
    config_path: &std::path::Path,
) -> Result<()> {
    // Validate args: --rpc requires --chain.
    if rpc_override.is_some() && chain_filter.is_none() {
        bail!("--rpc requires --chain to be specified");
    }

    let config = Config::load(config_path)?;
    let targets = chains::targets(default_registry(), chain_filter, include_testnets)?;

    tracing::info!(chains = targets.len(), "starting probe");

    let mut success = 0u32;
    let mut failed = 0u32;

    for chain in &targets {
        let chain_id = chain.chain_id;
        let rpcs = rpc_override
            .clone()
            .map_or_else(|| config.rpcs_for(chain), |url| vec![url]);
        match probe::probe_chain(chain, &rpcs).await {
            Ok(report) => {
                success += 1;
                tracing::info!(chain_id, rpc = %report.rpc, block = report.block, "probe ok");
            }
            Err(e) => {
                failed += 1;
                tracing::error!(chain_id, error = %e, "probe failed");
            }
        }
    }

    tracing::info!(success, failed, "probe finished");

    if failed > 0 {
        bail!("{failed} chain(s) failed the probe");
    }

    Ok(())
}
