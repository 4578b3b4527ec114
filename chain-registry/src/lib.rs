//! Static registry of supported EVM networks.
//!
//! Maps EIP-155 chain IDs to descriptive metadata (name, native token,
//! explorer and info URLs, RPC endpoints, deployed contracts, price
//! strategies) and derives the payloads other components need from it:
//! network definitions, EIP-3085 wallet parameters and read-only RPC
//! clients.
//!
//! ```
//! use chain_registry::{chain_native_token, is_supported_chain, is_testnet};
//!
//! assert!(is_supported_chain(42793));
//! assert_eq!(chain_native_token(42793)?, "XTZ");
//! assert!(is_testnet(128_123)?);
//! # Ok::<(), chain_registry::Error>(())
//! ```

pub mod chain;
pub mod error;
pub mod networks;
pub mod price;
pub mod registry;
pub mod types;

pub use chain::Chain;
pub use error::{Error, Result};
pub use price::{HardcodedPriceStrategy, PriceStrategy};
pub use registry::{
    ChainRegistry, chain_add_ethereum_chain_parameter, chain_api_identifier, chain_api_url,
    chain_backend_price_strategy, chain_config, chain_definition, chain_deployed_contracts,
    chain_explorer_url, chain_free_rpc_url, chain_id_by_slug, chain_info_url, chain_logo_url,
    chain_logs_rpc_url, chain_name, chain_native_token, chain_native_token_price_id,
    chain_price_strategy, chain_rate_limit, chain_rpc_url, chain_slug,
    corresponding_mainnet_chain_id, create_public_client, default_registry, is_supported_chain,
    is_testnet, supported_chains,
};
pub use types::{
    AddEthereumChainParameter, ChainDefinition, ContractDeployment, ContractRole,
    DeployedContracts, NativeCurrency, RateLimit, RpcEndpoints, SupportType,
};
