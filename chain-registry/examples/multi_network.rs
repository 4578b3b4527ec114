#![allow(clippy::print_stdout)]
//! Query the tip of every selectable chain through its registry client.
//!
//! Usage:
//!   cargo run --example `multi_network`
//!
//! Each client is bound to the chain's primary RPC URL; the same call works
//! unchanged across mainnets and testnets.

use alloy::providers::Provider;
use chain_registry::{chain_name, create_public_client, supported_chains};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    for &chain_id in supported_chains() {
        let client = create_public_client(chain_id, None)?;
        let reported = client.get_chain_id().await?;
        let block = client.get_block_number().await?;
        println!(
            "[{}] chain_id={chain_id}, reported={reported}, block={block}",
            chain_name(chain_id)?
        );
    }

    Ok(())
}
