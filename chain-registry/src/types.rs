//! Value types attached to chain records.
//!
//! Besides the plain configuration types (RPC endpoints, rate limits,
//! deployed contracts) this module holds the two derived payloads the
//! registry hands to external consumers: [`ChainDefinition`], a network
//! description shaped for chain-interaction libraries, and
//! [`AddEthereumChainParameter`], the EIP-3085 `wallet_addEthereumChain`
//! parameter bundle.

use std::time::Duration;

use alloy::primitives::Address;
use serde::Serialize;

/// Decimals reported for every native currency.
pub const NATIVE_CURRENCY_DECIMALS: u8 = 18;

/// Named RPC endpoint roles for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcEndpoints {
    /// Primary endpoint used for all reads.
    pub main: &'static str,
    /// Public "free tier" endpoint, handed to wallets and used as a fallback.
    pub free: Option<&'static str>,
    /// Dedicated endpoint for `eth_getLogs` queries.
    pub logs: Option<&'static str>,
}

impl RpcEndpoints {
    /// Endpoints with only a primary URL.
    #[must_use]
    pub const fn main(url: &'static str) -> Self {
        Self {
            main: url,
            free: None,
            logs: None,
        }
    }
}

/// Request-rate constraints for a chain's data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Length of one rate-limit window.
    pub interval: Duration,
    /// Maximum number of requests per window.
    pub interval_cap: u32,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

/// Contract roles the registry tracks deployments for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum ContractRole {
    /// The Multicall3 batch-read aggregator.
    Multicall3,
}

impl ContractRole {
    /// Every known role, in display order.
    pub const ALL: &[Self] = &[Self::Multicall3];

    /// Key used for this role in serialized network definitions.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Multicall3 => "multicall3",
        }
    }
}

/// A single on-chain contract deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeployment {
    /// Deployed contract address.
    pub address: Address,
    /// Block the contract was created in, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_created: Option<u64>,
}

/// Contracts deployed on a chain, keyed by [`ContractRole`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeployedContracts {
    /// Multicall3 deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multicall3: Option<ContractDeployment>,
}

impl DeployedContracts {
    /// Returns the deployment for `role`, if any.
    #[must_use]
    pub const fn get(&self, role: ContractRole) -> Option<&ContractDeployment> {
        match role {
            ContractRole::Multicall3 => self.multicall3.as_ref(),
        }
    }

    /// Iterates over every present deployment.
    pub fn iter(&self) -> impl Iterator<Item = (ContractRole, &ContractDeployment)> + '_ {
        ContractRole::ALL
            .iter()
            .filter_map(|&role| self.get(role).map(|deployment| (role, deployment)))
    }

    /// Returns `true` if no contract is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Routescan network family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutescanNetwork {
    /// Production networks.
    Mainnet,
    /// Test networks.
    Testnet,
}

impl RoutescanNetwork {
    /// Path segment used by the Routescan API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

/// How a chain's explorer-style data API is reached.
///
/// Each variant carries its own rule for deriving the API base URL and the
/// API identifier used to key per-API state such as rate limiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportType {
    /// A self-hosted explorer exposing an Etherscan-compatible API.
    EtherscanCompatible {
        /// Base URL of the API (e.g. `https://explorer.etherlink.com/api`).
        api_url: &'static str,
    },
    /// The shared Routescan Etherscan-compatible API.
    Routescan {
        /// Network family the chain is listed under.
        network: RoutescanNetwork,
    },
    /// No data API; everything goes through RPC.
    Provider,
}

impl SupportType {
    /// Base URL of the chain's data API, or `None` for RPC-only chains.
    #[must_use]
    pub fn api_url(self, chain_id: u64) -> Option<String> {
        match self {
            Self::EtherscanCompatible { api_url } => Some(api_url.to_owned()),
            Self::Routescan { network } => Some(format!(
                "https://api.routescan.io/v2/network/{}/evm/{chain_id}/etherscan/api",
                network.as_str()
            )),
            Self::Provider => None,
        }
    }

    /// Identifier for the chain's data API.
    ///
    /// Etherscan-compatible explorers are identified by their API host, so
    /// chains sharing an explorer share an identifier.
    #[must_use]
    pub fn api_identifier(self, chain_id: u64) -> String {
        match self {
            Self::EtherscanCompatible { api_url } => url::Url::parse(api_url)
                .ok()
                .and_then(|url| url.host_str().map(str::to_owned))
                .unwrap_or_else(|| format!("chain-{chain_id}")),
            Self::Routescan { network } => format!("routescan-{}-{chain_id}", network.as_str()),
            Self::Provider => format!("rpc-{chain_id}"),
        }
    }
}

/// Native currency descriptor shared by [`ChainDefinition`] and
/// [`AddEthereumChainParameter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    /// Currency name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Number of decimals (always 18 for EVM chains).
    pub decimals: u8,
}

impl NativeCurrency {
    /// Native currency named after its ticker.
    #[must_use]
    pub fn from_ticker(ticker: &str) -> Self {
        Self {
            name: ticker.to_owned(),
            symbol: ticker.to_owned(),
            decimals: NATIVE_CURRENCY_DECIMALS,
        }
    }
}

/// HTTP URLs for one RPC role in a [`ChainDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcUrlSet {
    /// HTTP(S) endpoints.
    pub http: Vec<String>,
}

/// RPC URL roles in a [`ChainDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcUrls {
    /// Endpoint used by default.
    pub default: RpcUrlSet,
}

/// A block explorer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    /// Display name.
    pub name: String,
    /// Explorer root URL.
    pub url: String,
}

/// Block explorers in a [`ChainDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockExplorers {
    /// Primary explorer.
    pub default: BlockExplorer,
}

/// Network description shaped for chain-interaction libraries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDefinition {
    /// EIP-155 chain ID.
    pub id: u64,
    /// Human-readable name.
    pub name: String,
    /// Native currency.
    pub native_currency: NativeCurrency,
    /// RPC endpoints.
    pub rpc_urls: RpcUrls,
    /// Block explorers, when the chain has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_explorers: Option<BlockExplorers>,
    /// Deployed helper contracts.
    #[serde(skip_serializing_if = "DeployedContracts::is_empty")]
    pub contracts: DeployedContracts,
    /// Whether this is a test network.
    pub testnet: bool,
}

/// EIP-3085 `wallet_addEthereumChain` parameters.
///
/// See: <https://eips.ethereum.org/EIPS/eip-3085>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameter {
    /// Chain ID as a `0x`-prefixed lowercase hex string.
    pub chain_id: String,
    /// Human-readable name.
    pub chain_name: String,
    /// Native currency.
    pub native_currency: NativeCurrency,
    /// RPC URLs handed to the wallet.
    pub rpc_urls: Vec<String>,
    /// Block explorer URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_explorer_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_identifier_uses_explorer_host() {
        let support = SupportType::EtherscanCompatible {
            api_url: "https://explorer.etherlink.com/api",
        };
        assert_eq!(
            support.api_identifier(42793),
            "explorer.etherlink.com",
            "etherscan-compatible identifier is the API host"
        );
        assert_eq!(
            support.api_url(42793).as_deref(),
            Some("https://explorer.etherlink.com/api"),
            "etherscan-compatible API URL is passed through"
        );
    }

    #[test]
    fn api_identifier_falls_back_on_unparseable_url() {
        let support = SupportType::EtherscanCompatible { api_url: "not a url" };
        assert_eq!(support.api_identifier(7), "chain-7", "fallback identifier");
    }

    #[test]
    fn routescan_derivation() {
        let support = SupportType::Routescan {
            network: RoutescanNetwork::Testnet,
        };
        assert_eq!(
            support.api_url(43113).as_deref(),
            Some("https://api.routescan.io/v2/network/testnet/evm/43113/etherscan/api"),
            "routescan API URL embeds network and chain"
        );
        assert_eq!(
            support.api_identifier(43113),
            "routescan-testnet-43113",
            "routescan identifier"
        );
    }

    #[test]
    fn provider_has_no_api() {
        assert_eq!(SupportType::Provider.api_url(5), None, "RPC-only chains have no API");
        assert_eq!(SupportType::Provider.api_identifier(5), "rpc-5", "provider identifier");
    }

    #[test]
    fn deployed_contracts_iteration() {
        let empty = DeployedContracts::default();
        assert!(empty.is_empty(), "default has no contracts");

        let contracts = DeployedContracts {
            multicall3: Some(ContractDeployment {
                address: Address::repeat_byte(0x11),
                block_created: Some(42),
            }),
        };
        let roles: Vec<_> = contracts.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, [ContractRole::Multicall3], "multicall3 listed");
        assert_eq!(
            contracts.get(ContractRole::Multicall3).and_then(|d| d.block_created),
            Some(42),
            "lookup by role"
        );
    }
}
