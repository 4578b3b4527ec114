//! Runtime configuration loaded from `config.toml`.
//!
//! Provides per-chain RPC endpoint lists that `probe` tries in order: if the
//! first RPC fails, the next one is tried.
//!
//! When no config file is present, or a chain has no entry, the registry's
//! own endpoints are used (primary first, then the free one).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chain_registry::Chain;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Per-chain RPC overrides, keyed by chain ID.
    pub chains: HashMap<u64, ChainRpcs>,
}

/// On-disk shape; TOML table keys are always strings.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    chains: HashMap<String, ChainRpcs>,
}

/// RPC endpoint list for a single chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainRpcs {
    /// Ordered list of RPC URLs (best first).
    pub rpcs: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist,
    /// allowing the binary to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using registry endpoints");
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let chains = raw
            .chains
            .into_iter()
            .map(|(key, rpcs)| {
                let chain_id = key
                    .parse::<u64>()
                    .with_context(|| format!("invalid chain ID key {key:?}"))?;
                Ok((chain_id, rpcs))
            })
            .collect::<Result<_>>()?;
        Ok(Self { chains })
    }

    /// Return the RPC URL list for a chain, falling back to the registry's
    /// primary and free endpoints if the config has no entry for it.
    #[must_use]
    pub fn rpcs_for(&self, chain: &Chain) -> Vec<String> {
        match self.chains.get(&chain.chain_id) {
            Some(c) if !c.rpcs.is_empty() => c.rpcs.clone(),
            _ => chain
                .rpc_url()
                .into_iter()
                .chain(chain.free_rpc_url())
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chain_registry::chain_config;
    use chain_registry::networks::{ETHERLINK, ETHERLINK_GHOSTNET};

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/chain-registry.toml")).unwrap();
        assert!(config.chains.is_empty(), "no overrides");
    }

    #[test]
    fn registry_endpoints_without_override() {
        let config = Config::default();
        let etherlink = chain_config(ETHERLINK).unwrap();
        assert_eq!(
            config.rpcs_for(etherlink),
            ["https://rpc.bubbletez.com", "https://node.mainnet.etherlink.com"],
            "primary then free"
        );
        let ghostnet = chain_config(ETHERLINK_GHOSTNET).unwrap();
        assert_eq!(
            config.rpcs_for(ghostnet),
            ["https://node.ghostnet.etherlink.com"],
            "primary only"
        );
    }

    #[test]
    fn override_replaces_registry_endpoints() {
        let config = Config::parse(
            r#"
            [chains.42793]
            rpcs = ["https://a.example.com", "https://b.example.com"]

            [chains.128123]
            rpcs = []
            "#,
        )
        .unwrap();
        assert_eq!(
            config.rpcs_for(chain_config(ETHERLINK).unwrap()),
            ["https://a.example.com", "https://b.example.com"],
            "configured list in order"
        );
        assert_eq!(
            config.rpcs_for(chain_config(ETHERLINK_GHOSTNET).unwrap()),
            ["https://node.ghostnet.etherlink.com"],
            "empty list falls back to registry"
        );
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(
            Config::parse("[chains.42793]\nrpcs = \"not-a-list\"").is_err(),
            "rpcs must be a list"
        );
        assert!(
            Config::parse("[chains.etherlink]\nrpcs = []").is_err(),
            "keys must be chain IDs"
        );
    }
}
