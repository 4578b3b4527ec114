//! The per-network chain record.

use alloy::providers::RootProvider;
use url::Url;

use crate::error::{Error, Result};
use crate::price::PriceStrategy;
use crate::types::{
    AddEthereumChainParameter, BlockExplorer, BlockExplorers, ChainDefinition, DeployedContracts,
    NativeCurrency, RateLimit, RpcEndpoints, RpcUrlSet, RpcUrls, SupportType,
};

/// Static configuration for a single supported network.
#[derive(Debug, Clone, Copy)]
pub struct Chain {
    /// EIP-155 chain ID.
    pub chain_id: u64,
    /// Human-readable name.
    pub name: &'static str,
    /// Ticker of the native currency.
    pub native_token: &'static str,
    /// External price-feed identifier of the native token (CoinGecko ID).
    pub native_token_price_id: Option<&'static str>,
    /// Path to the chain's icon.
    pub logo_url: &'static str,
    /// Project homepage.
    pub info_url: Option<&'static str>,
    /// Block explorer root URL.
    pub explorer_url: Option<&'static str>,
    /// How the chain's data API is reached.
    pub support: SupportType,
    /// RPC endpoints.
    pub rpc: RpcEndpoints,
    /// Known contract deployments.
    pub deployed_contracts: Option<DeployedContracts>,
    /// Client-side price strategy. `None` disables pricing.
    pub price_strategy: Option<&'static dyn PriceStrategy>,
    /// Backend price strategy, when it differs from the client-side one.
    pub backend_price_strategy: Option<&'static dyn PriceStrategy>,
    /// Whether this is a test network.
    pub is_testnet: bool,
    /// Mainnet counterpart of a testnet.
    pub corresponding_mainnet_chain_id: Option<u64>,
    /// Data API rate limit.
    pub rate_limit: Option<RateLimit>,
}

impl Chain {
    /// URL-safe slug derived from the name (`"Etherlink Ghostnet"` → `"etherlink-ghostnet"`).
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        if slug.ends_with('-') {
            slug.pop();
        }
        slug
    }

    /// Primary RPC URL, or `None` if the record has an empty one.
    #[must_use]
    pub const fn rpc_url(&self) -> Option<&'static str> {
        if self.rpc.main.is_empty() {
            None
        } else {
            Some(self.rpc.main)
        }
    }

    /// RPC URL for log queries, falling back to the primary one.
    #[must_use]
    pub const fn logs_rpc_url(&self) -> Option<&'static str> {
        match self.rpc.logs {
            Some(url) => Some(url),
            None => self.rpc_url(),
        }
    }

    /// Public "free tier" RPC URL.
    #[must_use]
    pub const fn free_rpc_url(&self) -> Option<&'static str> {
        self.rpc.free
    }

    /// Base URL of the chain's data API.
    #[must_use]
    pub fn api_url(&self) -> Option<String> {
        self.support.api_url(self.chain_id)
    }

    /// Identifier of the chain's data API.
    #[must_use]
    pub fn api_identifier(&self) -> String {
        self.support.api_identifier(self.chain_id)
    }

    /// Backend price strategy, falling back to the client-side one.
    #[must_use]
    pub fn backend_price_strategy(&self) -> Option<&'static dyn PriceStrategy> {
        self.backend_price_strategy.or(self.price_strategy)
    }

    /// Builds the network description for chain-interaction libraries.
    #[must_use]
    pub fn definition(&self) -> ChainDefinition {
        ChainDefinition {
            id: self.chain_id,
            name: self.name.to_owned(),
            native_currency: NativeCurrency::from_ticker(self.native_token),
            rpc_urls: RpcUrls {
                default: RpcUrlSet {
                    http: self.rpc_url().map(str::to_owned).into_iter().collect(),
                },
            },
            block_explorers: self.explorer_url.map(|url| BlockExplorers {
                default: BlockExplorer {
                    name: format!("{} Explorer", self.name),
                    url: url.to_owned(),
                },
            }),
            contracts: self.deployed_contracts.unwrap_or_default(),
            testnet: self.is_testnet,
        }
    }

    /// Builds the EIP-3085 parameters used to add this chain to a wallet.
    ///
    /// Wallets receive the free RPC endpoint when one exists, since the
    /// primary endpoint may be a private node.
    #[must_use]
    pub fn add_ethereum_chain_parameter(&self) -> AddEthereumChainParameter {
        let rpc = self.free_rpc_url().or_else(|| self.rpc_url());
        AddEthereumChainParameter {
            chain_id: format!("{:#x}", self.chain_id),
            chain_name: self.name.to_owned(),
            native_currency: NativeCurrency::from_ticker(self.native_token),
            rpc_urls: rpc.map(str::to_owned).into_iter().collect(),
            block_explorer_urls: self.explorer_url.map(|url| vec![url.to_owned()]),
        }
    }

    /// Creates a read-only client bound to `url`, or to the primary RPC URL.
    ///
    /// No request is sent until the client is used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRpcUrl`] if neither `url` nor the record provides
    /// an endpoint, and [`Error::InvalidRpcUrl`] if it does not parse.
    pub fn create_public_client(&self, url: Option<&str>) -> Result<RootProvider> {
        let url = url
            .filter(|url| !url.is_empty())
            .or_else(|| self.rpc_url())
            .ok_or(Error::NoRpcUrl(self.chain_id))?;
        let parsed = Url::parse(url).map_err(|source| Error::InvalidRpcUrl {
            url: url.to_owned(),
            source,
        })?;
        tracing::debug!(chain_id = self.chain_id, rpc = %parsed, "creating public client");
        Ok(RootProvider::new_http(parsed))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;
    use crate::price::HardcodedPriceStrategy;
    use crate::types::ContractDeployment;

    static NATIVE_ONLY: HardcodedPriceStrategy = HardcodedPriceStrategy::native(2.5);
    static BACKEND: HardcodedPriceStrategy = HardcodedPriceStrategy::native(2.6);

    const fn sample() -> Chain {
        Chain {
            chain_id: 31337,
            name: "Local  Dev-Net (Anvil)",
            native_token: "ETH",
            native_token_price_id: None,
            logo_url: "/assets/images/vendor/chains/anvil.svg",
            info_url: None,
            explorer_url: None,
            support: SupportType::Provider,
            rpc: RpcEndpoints {
                main: "http://127.0.0.1:8545",
                free: None,
                logs: Some("http://127.0.0.1:8546"),
            },
            deployed_contracts: None,
            price_strategy: None,
            backend_price_strategy: None,
            is_testnet: true,
            corresponding_mainnet_chain_id: None,
            rate_limit: None,
        }
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(sample().slug(), "local-dev-net-anvil", "slug normalization");
    }

    #[test]
    fn rpc_roles() {
        let chain = sample();
        assert_eq!(chain.rpc_url(), Some("http://127.0.0.1:8545"), "main RPC");
        assert_eq!(
            chain.logs_rpc_url(),
            Some("http://127.0.0.1:8546"),
            "dedicated logs RPC wins"
        );
        assert_eq!(chain.free_rpc_url(), None, "no free RPC");

        let chain = Chain {
            rpc: RpcEndpoints::main("http://127.0.0.1:8545"),
            ..sample()
        };
        assert_eq!(
            chain.logs_rpc_url(),
            chain.rpc_url(),
            "logs RPC falls back to main"
        );
    }

    #[test]
    fn empty_main_rpc_is_unresolvable() {
        let chain = Chain {
            rpc: RpcEndpoints::main(""),
            ..sample()
        };
        assert_eq!(chain.rpc_url(), None, "empty main RPC is absent");
        assert!(
            matches!(chain.create_public_client(None), Err(Error::NoRpcUrl(31337))),
            "no URL to bind to"
        );
        assert!(
            chain.create_public_client(Some("http://override:8545")).is_ok(),
            "override URL still works"
        );
    }

    #[test]
    fn invalid_override_url() {
        let result = sample().create_public_client(Some("::not a url::"));
        assert!(
            matches!(result, Err(Error::InvalidRpcUrl { ref url, .. }) if url == "::not a url::"),
            "unparseable override is rejected"
        );
    }

    #[test]
    fn backend_strategy_falls_back_to_client_strategy() {
        let chain = Chain {
            price_strategy: Some(&NATIVE_ONLY),
            ..sample()
        };
        assert_eq!(
            chain
                .backend_price_strategy()
                .and_then(|s| s.native_token_price()),
            Some(2.5),
            "fallback to client-side strategy"
        );

        let chain = Chain {
            backend_price_strategy: Some(&BACKEND),
            ..chain
        };
        assert_eq!(
            chain
                .backend_price_strategy()
                .and_then(|s| s.native_token_price()),
            Some(2.6),
            "explicit backend strategy wins"
        );
    }

    #[test]
    fn definition_without_explorer_or_contracts() {
        let json = serde_json::to_value(sample().definition()).unwrap();
        assert!(json.get("blockExplorers").is_none(), "no explorer entry");
        assert!(json.get("contracts").is_none(), "no contracts entry");
        assert_eq!(json["testnet"], true, "testnet flag");
        assert_eq!(
            json["rpcUrls"]["default"]["http"][0], "http://127.0.0.1:8545",
            "default RPC"
        );
    }

    #[test]
    fn definition_lists_contracts() {
        let chain = Chain {
            deployed_contracts: Some(DeployedContracts {
                multicall3: Some(ContractDeployment {
                    address: Address::repeat_byte(0x01),
                    block_created: Some(7),
                }),
            }),
            ..sample()
        };
        let json = serde_json::to_value(chain.definition()).unwrap();
        assert_eq!(
            json["contracts"]["multicall3"]["blockCreated"], 7,
            "contract block is serialized"
        );
    }
}
