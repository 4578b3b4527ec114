#![allow(clippy::print_stdout)]
//! Print the EIP-3085 `wallet_addEthereumChain` parameters and the network
//! definition of every selectable chain (pure offline).
//!
//! Usage:
//!   cargo run --example `wallet_params`

use chain_registry::{chain_add_ethereum_chain_parameter, chain_definition, supported_chains};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for &chain_id in supported_chains() {
        let params = chain_add_ethereum_chain_parameter(chain_id)?;
        println!("{}", serde_json::to_string_pretty(&params)?);

        let definition = chain_definition(chain_id)?;
        println!("{}", serde_json::to_string_pretty(&definition)?);
    }

    Ok(())
}
