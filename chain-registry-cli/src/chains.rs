//! Chain selection for CLI subcommands.
//!
//! A chain can be named on the command line by its EIP-155 chain ID
//! (`42793`) or by its slug (`etherlink-ghostnet`).

use anyhow::{Context, Result};
use chain_registry::{Chain, ChainRegistry};

/// Resolve a chain ID or slug to a documented chain.
///
/// # Errors
///
/// Returns an error if the selector matches no documented chain.
pub fn resolve(registry: &ChainRegistry, selector: &str) -> Result<&'static Chain> {
    let chain_id = match selector.parse::<u64>() {
        Ok(id) => id,
        Err(_) => registry
            .chain_id_by_slug(&selector.to_ascii_lowercase())
            .with_context(|| format!("unknown chain {selector:?}"))?,
    };
    Ok(registry.chain_config(chain_id)?)
}

/// Chains targeted by a command: the selected one, or every supported
/// mainnet (plus testnets when asked).
///
/// # Errors
///
/// Returns an error if `selector` is given and cannot be resolved.
pub fn targets(
    registry: &ChainRegistry,
    selector: Option<&str>,
    include_testnets: bool,
) -> Result<Vec<&'static Chain>> {
    if let Some(selector) = selector {
        return Ok(vec![resolve(registry, selector)?]);
    }
    registry
        .supported_chains()
        .iter()
        .map(|&id| registry.chain_config(id))
        .filter(|chain| include_testnets || chain.as_ref().is_ok_and(|c| !c.is_testnet))
        .map(|chain| chain.map_err(Into::into))
        .collect()
}
