//! Keyed, immutable collection of chain records.
//!
//! [`ChainRegistry`] pairs an ordered list of selectable chain IDs (mainnets
//! first) with a map of every documented [`Chain`]. The built-in registry is
//! available through [`default_registry`] and the free functions of this
//! module, which mirror the registry's methods.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use alloy::providers::RootProvider;

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::networks;
use crate::price::PriceStrategy;
use crate::types::{AddEthereumChainParameter, ChainDefinition, DeployedContracts, RateLimit};

/// Ordered set of supported chains plus the records of all documented chains.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    mainnets: &'static [u64],
    testnets: &'static [u64],
    ordered: Vec<u64>,
    records: &'static [Chain],
    chains: BTreeMap<u64, &'static Chain>,
}

impl ChainRegistry {
    /// Builds a registry from static tables.
    ///
    /// When `records` contains the same chain ID twice the first entry wins;
    /// call [`validate`](Self::validate) to reject such tables.
    #[must_use]
    pub fn new(
        mainnets: &'static [u64],
        testnets: &'static [u64],
        records: &'static [Chain],
    ) -> Self {
        let mut chains = BTreeMap::new();
        for chain in records {
            chains.entry(chain.chain_id).or_insert(chain);
        }
        Self {
            mainnets,
            testnets,
            ordered: mainnets.iter().chain(testnets).copied().collect(),
            records,
            chains,
        }
    }

    /// Checks the structural invariants of the tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegistry`] describing the first violation:
    /// a supported ID listed twice or without a record, a duplicate record,
    /// a mainnet flagged as testnet (or the reverse), an empty primary RPC,
    /// or a testnet whose mainnet counterpart is unknown or itself a testnet.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidRegistry(msg));

        let mut seen = HashSet::new();
        for &id in &self.ordered {
            if !seen.insert(id) {
                return invalid(format!("chain {id} is listed more than once"));
            }
            if !self.chains.contains_key(&id) {
                return invalid(format!("supported chain {id} has no record"));
            }
        }

        if self.chains.len() != self.records.len() {
            let mut ids = HashSet::new();
            let duplicate = self
                .records
                .iter()
                .find(|c| !ids.insert(c.chain_id))
                .map_or(0, |c| c.chain_id);
            return invalid(format!("chain {duplicate} has more than one record"));
        }

        for (&id, expect_testnet) in self
            .mainnets
            .iter()
            .map(|id| (id, false))
            .chain(self.testnets.iter().map(|id| (id, true)))
        {
            if self.chains.get(&id).is_some_and(|c| c.is_testnet != expect_testnet) {
                let listed = if expect_testnet { "testnet" } else { "mainnet" };
                return invalid(format!(
                    "chain {id} is listed as a {listed} but flagged otherwise"
                ));
            }
        }

        for chain in self.chains.values() {
            if chain.rpc.main.is_empty() {
                return invalid(format!("chain {} has no primary RPC URL", chain.chain_id));
            }
            let Some(mainnet_id) = chain.corresponding_mainnet_chain_id else {
                continue;
            };
            match self.chains.get(&mainnet_id) {
                None => {
                    return invalid(format!(
                        "chain {} refers to unknown mainnet {mainnet_id}",
                        chain.chain_id
                    ));
                }
                Some(mainnet) if mainnet.is_testnet => {
                    return invalid(format!(
                        "chain {} refers to testnet {mainnet_id} as its mainnet",
                        chain.chain_id
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Selectable chain IDs: mainnets, then testnets.
    #[must_use]
    pub fn supported_chains(&self) -> &[u64] {
        &self.ordered
    }

    /// Selectable mainnet IDs.
    #[must_use]
    pub const fn mainnets(&self) -> &'static [u64] {
        self.mainnets
    }

    /// Selectable testnet IDs.
    #[must_use]
    pub const fn testnets(&self) -> &'static [u64] {
        self.testnets
    }

    /// Every documented chain, ordered by chain ID.
    pub fn documented_chains(&self) -> impl Iterator<Item = &'static Chain> + '_ {
        self.chains.values().copied()
    }

    /// Returns `true` if `chain_id` is a selectable chain.
    #[must_use]
    pub fn is_supported_chain(&self, chain_id: u64) -> bool {
        self.ordered.contains(&chain_id)
    }

    /// Returns `true` if `chain_id` has a record.
    #[must_use]
    pub fn is_documented_chain(&self, chain_id: u64) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Full record of a documented chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_config(&self, chain_id: u64) -> Result<&'static Chain> {
        self.chains.get(&chain_id).copied().ok_or_else(|| {
            tracing::trace!(chain_id, "lookup of undocumented chain");
            Error::UnknownChain(chain_id)
        })
    }

    /// Looks up a documented chain by its slug.
    #[must_use]
    pub fn chain_id_by_slug(&self, slug: &str) -> Option<u64> {
        self.chains
            .values()
            .find(|c| c.slug() == slug)
            .map(|c| c.chain_id)
    }

    /// Chain name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_name(&self, chain_id: u64) -> Result<&'static str> {
        Ok(self.chain_config(chain_id)?.name)
    }

    /// URL-safe slug of the chain name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_slug(&self, chain_id: u64) -> Result<String> {
        Ok(self.chain_config(chain_id)?.slug())
    }

    /// Native token ticker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_native_token(&self, chain_id: u64) -> Result<&'static str> {
        Ok(self.chain_config(chain_id)?.native_token)
    }

    /// Price-feed identifier of the native token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_native_token_price_id(&self, chain_id: u64) -> Result<Option<&'static str>> {
        Ok(self.chain_config(chain_id)?.native_token_price_id)
    }

    /// Logo path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_logo_url(&self, chain_id: u64) -> Result<&'static str> {
        Ok(self.chain_config(chain_id)?.logo_url)
    }

    /// Project homepage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_info_url(&self, chain_id: u64) -> Result<Option<&'static str>> {
        Ok(self.chain_config(chain_id)?.info_url)
    }

    /// Block explorer URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_explorer_url(&self, chain_id: u64) -> Result<Option<&'static str>> {
        Ok(self.chain_config(chain_id)?.explorer_url)
    }

    /// Whether the chain is a test network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn is_testnet(&self, chain_id: u64) -> Result<bool> {
        Ok(self.chain_config(chain_id)?.is_testnet)
    }

    /// Primary RPC URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_rpc_url(&self, chain_id: u64) -> Result<Option<&'static str>> {
        Ok(self.chain_config(chain_id)?.rpc_url())
    }

    /// RPC URL for log queries, falling back to the primary one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_logs_rpc_url(&self, chain_id: u64) -> Result<Option<&'static str>> {
        Ok(self.chain_config(chain_id)?.logs_rpc_url())
    }

    /// Public "free tier" RPC URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_free_rpc_url(&self, chain_id: u64) -> Result<Option<&'static str>> {
        Ok(self.chain_config(chain_id)?.free_rpc_url())
    }

    /// Data API rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_rate_limit(&self, chain_id: u64) -> Result<Option<RateLimit>> {
        Ok(self.chain_config(chain_id)?.rate_limit)
    }

    /// Base URL of the chain's data API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_api_url(&self, chain_id: u64) -> Result<Option<String>> {
        Ok(self.chain_config(chain_id)?.api_url())
    }

    /// Identifier of the chain's data API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_api_identifier(&self, chain_id: u64) -> Result<String> {
        Ok(self.chain_config(chain_id)?.api_identifier())
    }

    /// Mainnet counterpart of a testnet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn corresponding_mainnet_chain_id(&self, chain_id: u64) -> Result<Option<u64>> {
        Ok(self.chain_config(chain_id)?.corresponding_mainnet_chain_id)
    }

    /// Known contract deployments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_deployed_contracts(
        &self,
        chain_id: u64,
    ) -> Result<Option<&'static DeployedContracts>> {
        Ok(self.chain_config(chain_id)?.deployed_contracts.as_ref())
    }

    /// Network description for chain-interaction libraries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_definition(&self, chain_id: u64) -> Result<ChainDefinition> {
        Ok(self.chain_config(chain_id)?.definition())
    }

    /// Read-only client bound to `url`, or to the chain's primary RPC URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record, and the
    /// errors of [`Chain::create_public_client`].
    pub fn create_public_client(&self, chain_id: u64, url: Option<&str>) -> Result<RootProvider> {
        self.chain_config(chain_id)?.create_public_client(url)
    }

    /// EIP-3085 parameters for adding the chain to a wallet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_add_ethereum_chain_parameter(
        &self,
        chain_id: u64,
    ) -> Result<AddEthereumChainParameter> {
        Ok(self.chain_config(chain_id)?.add_ethereum_chain_parameter())
    }

    /// Client-side price strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_price_strategy(&self, chain_id: u64) -> Result<Option<&'static dyn PriceStrategy>> {
        Ok(self.chain_config(chain_id)?.price_strategy)
    }

    /// Backend price strategy, falling back to the client-side one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChain`] if `chain_id` has no record.
    pub fn chain_backend_price_strategy(
        &self,
        chain_id: u64,
    ) -> Result<Option<&'static dyn PriceStrategy>> {
        Ok(self.chain_config(chain_id)?.backend_price_strategy())
    }
}

static DEFAULT_REGISTRY: LazyLock<ChainRegistry> = LazyLock::new(|| {
    ChainRegistry::new(networks::MAINNETS, networks::TESTNETS, networks::CHAINS)
});

/// Returns the lazily-initialized registry of built-in networks.
#[must_use]
pub fn default_registry() -> &'static ChainRegistry {
    &DEFAULT_REGISTRY
}

/// Selectable chain IDs of the built-in registry.
#[must_use]
pub fn supported_chains() -> &'static [u64] {
    default_registry().supported_chains()
}

/// See [`ChainRegistry::is_supported_chain`].
#[must_use]
pub fn is_supported_chain(chain_id: u64) -> bool {
    default_registry().is_supported_chain(chain_id)
}

/// See [`ChainRegistry::chain_config`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_config(chain_id: u64) -> Result<&'static Chain> {
    default_registry().chain_config(chain_id)
}

/// See [`ChainRegistry::chain_id_by_slug`].
#[must_use]
pub fn chain_id_by_slug(slug: &str) -> Option<u64> {
    default_registry().chain_id_by_slug(slug)
}

/// See [`ChainRegistry::chain_name`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_name(chain_id: u64) -> Result<&'static str> {
    default_registry().chain_name(chain_id)
}

/// See [`ChainRegistry::chain_slug`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_slug(chain_id: u64) -> Result<String> {
    default_registry().chain_slug(chain_id)
}

/// See [`ChainRegistry::chain_native_token`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_native_token(chain_id: u64) -> Result<&'static str> {
    default_registry().chain_native_token(chain_id)
}

/// See [`ChainRegistry::chain_native_token_price_id`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_native_token_price_id(chain_id: u64) -> Result<Option<&'static str>> {
    default_registry().chain_native_token_price_id(chain_id)
}

/// See [`ChainRegistry::chain_logo_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_logo_url(chain_id: u64) -> Result<&'static str> {
    default_registry().chain_logo_url(chain_id)
}

/// See [`ChainRegistry::chain_info_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_info_url(chain_id: u64) -> Result<Option<&'static str>> {
    default_registry().chain_info_url(chain_id)
}

/// See [`ChainRegistry::chain_explorer_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_explorer_url(chain_id: u64) -> Result<Option<&'static str>> {
    default_registry().chain_explorer_url(chain_id)
}

/// See [`ChainRegistry::is_testnet`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn is_testnet(chain_id: u64) -> Result<bool> {
    default_registry().is_testnet(chain_id)
}

/// See [`ChainRegistry::chain_rpc_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_rpc_url(chain_id: u64) -> Result<Option<&'static str>> {
    default_registry().chain_rpc_url(chain_id)
}

/// See [`ChainRegistry::chain_logs_rpc_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_logs_rpc_url(chain_id: u64) -> Result<Option<&'static str>> {
    default_registry().chain_logs_rpc_url(chain_id)
}

/// See [`ChainRegistry::chain_free_rpc_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_free_rpc_url(chain_id: u64) -> Result<Option<&'static str>> {
    default_registry().chain_free_rpc_url(chain_id)
}

/// See [`ChainRegistry::chain_rate_limit`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_rate_limit(chain_id: u64) -> Result<Option<RateLimit>> {
    default_registry().chain_rate_limit(chain_id)
}

/// See [`ChainRegistry::chain_api_url`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_api_url(chain_id: u64) -> Result<Option<String>> {
    default_registry().chain_api_url(chain_id)
}

/// See [`ChainRegistry::chain_api_identifier`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_api_identifier(chain_id: u64) -> Result<String> {
    default_registry().chain_api_identifier(chain_id)
}

/// See [`ChainRegistry::corresponding_mainnet_chain_id`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn corresponding_mainnet_chain_id(chain_id: u64) -> Result<Option<u64>> {
    default_registry().corresponding_mainnet_chain_id(chain_id)
}

/// See [`ChainRegistry::chain_deployed_contracts`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_deployed_contracts(chain_id: u64) -> Result<Option<&'static DeployedContracts>> {
    default_registry().chain_deployed_contracts(chain_id)
}

/// See [`ChainRegistry::chain_definition`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_definition(chain_id: u64) -> Result<ChainDefinition> {
    default_registry().chain_definition(chain_id)
}

/// See [`ChainRegistry::create_public_client`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record, and the
/// errors of [`Chain::create_public_client`].
pub fn create_public_client(chain_id: u64, url: Option<&str>) -> Result<RootProvider> {
    default_registry().create_public_client(chain_id, url)
}

/// See [`ChainRegistry::chain_add_ethereum_chain_parameter`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_add_ethereum_chain_parameter(chain_id: u64) -> Result<AddEthereumChainParameter> {
    default_registry().chain_add_ethereum_chain_parameter(chain_id)
}

/// See [`ChainRegistry::chain_price_strategy`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_price_strategy(chain_id: u64) -> Result<Option<&'static dyn PriceStrategy>> {
    default_registry().chain_price_strategy(chain_id)
}

/// See [`ChainRegistry::chain_backend_price_strategy`].
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `chain_id` has no record.
pub fn chain_backend_price_strategy(chain_id: u64) -> Result<Option<&'static dyn PriceStrategy>> {
    default_registry().chain_backend_price_strategy(chain_id)
}
