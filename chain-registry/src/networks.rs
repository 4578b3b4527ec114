//! Built-in network definitions.
//!
//! This build ships the Etherlink networks only. Adding a network means
//! adding its [`Chain`] to [`CHAINS`] and listing its ID in [`MAINNETS`] or
//! [`TESTNETS`] if it should be selectable.

use alloy::primitives::{Address, address};

use crate::chain::Chain;
use crate::types::{ContractDeployment, DeployedContracts, RpcEndpoints, SupportType};

/// Multicall3 address, identical on every chain it is deployed to.
pub const MULTICALL3_ADDRESS: Address = address!("cA11bde05977b3631167028862bE2a173976CA11");

const MULTICALL: DeployedContracts = DeployedContracts {
    multicall3: Some(ContractDeployment {
        address: MULTICALL3_ADDRESS,
        block_created: None,
    }),
};

const ETHERLINK_LOGO: &str = "/assets/images/vendor/chains/etherlink.svg";
const ETHERLINK_INFO: &str = "https://etherlink.com";

/// Etherlink mainnet.
pub const ETHERLINK: u64 = 42793;
/// Etherlink Ghostnet testnet.
pub const ETHERLINK_GHOSTNET: u64 = 128_123;
/// Etherlink Shadownet testnet.
pub const ETHERLINK_SHADOWNET: u64 = 127_823;

/// Selectable mainnets, in display order.
pub const MAINNETS: &[u64] = &[ETHERLINK];

/// Selectable testnets, in display order.
pub const TESTNETS: &[u64] = &[ETHERLINK_GHOSTNET, ETHERLINK_SHADOWNET];

/// Every documented chain.
pub static CHAINS: &[Chain] = &[
    Chain {
        chain_id: ETHERLINK,
        name: "Etherlink",
        native_token: "XTZ",
        native_token_price_id: Some("tezos"),
        logo_url: ETHERLINK_LOGO,
        info_url: Some(ETHERLINK_INFO),
        explorer_url: Some("https://explorer.etherlink.com"),
        support: SupportType::EtherscanCompatible {
            api_url: "https://explorer.etherlink.com/api",
        },
        rpc: RpcEndpoints {
            main: "https://rpc.bubbletez.com",
            free: Some("https://node.mainnet.etherlink.com"),
            logs: None,
        },
        deployed_contracts: Some(MULTICALL),
        price_strategy: None,
        backend_price_strategy: None,
        is_testnet: false,
        corresponding_mainnet_chain_id: None,
        rate_limit: None,
    },
    Chain {
        chain_id: ETHERLINK_GHOSTNET,
        name: "Etherlink Ghostnet",
        native_token: "XTZ",
        native_token_price_id: None,
        logo_url: ETHERLINK_LOGO,
        info_url: Some(ETHERLINK_INFO),
        explorer_url: Some("https://testnet.explorer.etherlink.com"),
        support: SupportType::EtherscanCompatible {
            api_url: "https://testnet.explorer.etherlink.com/api",
        },
        rpc: RpcEndpoints::main("https://node.ghostnet.etherlink.com"),
        deployed_contracts: Some(MULTICALL),
        price_strategy: None,
        backend_price_strategy: None,
        is_testnet: true,
        corresponding_mainnet_chain_id: Some(ETHERLINK),
        rate_limit: None,
    },
    Chain {
        chain_id: ETHERLINK_SHADOWNET,
        name: "Etherlink Shadownet",
        native_token: "XTZ",
        native_token_price_id: None,
        logo_url: ETHERLINK_LOGO,
        info_url: Some(ETHERLINK_INFO),
        explorer_url: Some("https://shadownet.explorer.etherlink.com"),
        support: SupportType::EtherscanCompatible {
            api_url: "https://shadownet.explorer.etherlink.com/api",
        },
        rpc: RpcEndpoints::main("https://node.shadownet.etherlink.com"),
        deployed_contracts: Some(MULTICALL),
        price_strategy: None,
        backend_price_strategy: None,
        is_testnet: true,
        corresponding_mainnet_chain_id: Some(ETHERLINK),
        rate_limit: None,
    },
];
