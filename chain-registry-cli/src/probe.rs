//! RPC endpoint probing.
//!
//! For each chain the prober:
//! 1. Builds a read-only client for the next candidate RPC URL.
//! 2. Checks that the endpoint reports the registry's chain ID.
//! 3. Reads the chain tip.
//!
//! The first endpoint that passes wins; the others are only tried on failure.

use std::future::Future;
use std::time::Duration;

use alloy::providers::Provider;
use anyhow::{Context, Result, bail};
use chain_registry::Chain;

/// Per-request timeout for RPC calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Chain that was probed.
    pub chain_id: u64,
    /// Endpoint that answered.
    pub rpc: String,
    /// Latest block number reported by the endpoint.
    pub block: u64,
}

/// Await an RPC call, bounded by [`REQUEST_TIMEOUT`].
async fn with_timeout<T, E, F>(what: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    tokio::time::timeout(REQUEST_TIMEOUT, call)
        .await
        .with_context(|| format!("{what} timed out"))?
        .with_context(|| format!("{what} failed"))
}

/// Probe a single chain with automatic RPC fallback.
///
/// Tries each RPC in `rpcs` in order and returns the report of the first
/// one that answers with the expected chain ID.
///
/// # Errors
///
/// Returns an error if `rpcs` is empty or *all* RPCs fail.
pub async fn probe_chain(chain: &Chain, rpcs: &[String]) -> Result<ProbeReport> {
    let chain_id = chain.chain_id;
    let mut last_err = None;

    for (i, rpc_url) in rpcs.iter().enumerate() {
        match try_probe(chain, rpc_url).await {
            Ok(report) => return Ok(report),
            Err(e) => {
                if let Some(next) = rpcs.get(i + 1) {
                    tracing::warn!(
                        chain_id,
                        rpc = %rpc_url,
                        next = %next,
                        error = %e,
                        "RPC failed, falling back"
                    );
                } else {
                    tracing::error!(chain_id, rpc = %rpc_url, error = %e, "last RPC failed");
                }
                last_err = Some(e);
            }
        }
    }

    match last_err {
        Some(e) => Err(e),
        None => bail!("chain {chain_id}: no RPC endpoint to probe"),
    }
}

/// Probe a single RPC endpoint.
async fn try_probe(chain: &Chain, rpc_url: &str) -> Result<ProbeReport> {
    let chain_id = chain.chain_id;
    tracing::info!(chain_id, rpc = rpc_url, "connecting");

    let client = chain.create_public_client(Some(rpc_url))?;

    let reported = with_timeout("eth_chainId", client.get_chain_id()).await?;
    if reported != chain_id {
        bail!("{rpc_url} reports chain ID {reported}, expected {chain_id}");
    }

    let block = with_timeout("eth_blockNumber", client.get_block_number()).await?;
    tracing::info!(chain_id, rpc = rpc_url, block, "endpoint healthy");

    Ok(ProbeReport {
        chain_id,
        rpc: rpc_url.to_owned(),
        block,
    })
}
