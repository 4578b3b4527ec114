//! Pluggable token pricing.
//!
//! A chain record may carry a [`PriceStrategy`] for client-side pricing and
//! a separate one for backend use. Live strategies (DEX quotes, aggregators)
//! live outside this crate and only need to implement the trait.

use std::fmt;

use alloy::primitives::Address;

/// Resolves fiat-equivalent prices for assets on one chain.
pub trait PriceStrategy: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Price of the chain's native token, if this strategy can provide it.
    fn native_token_price(&self) -> Option<f64>;

    /// Price of an ERC-20 token, if this strategy can provide it.
    fn token_price(&self, token: Address) -> Option<f64>;
}

/// Fixed prices baked into the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardcodedPriceStrategy {
    /// Native token price.
    pub native_price: Option<f64>,
    /// Per-token prices.
    pub tokens: &'static [(Address, f64)],
}

impl HardcodedPriceStrategy {
    /// Strategy with only a native token price.
    #[must_use]
    pub const fn native(price: f64) -> Self {
        Self {
            native_price: Some(price),
            tokens: &[],
        }
    }

    /// Adds fixed token prices.
    #[must_use]
    pub const fn with_tokens(mut self, tokens: &'static [(Address, f64)]) -> Self {
        self.tokens = tokens;
        self
    }
}

impl PriceStrategy for HardcodedPriceStrategy {
    fn name(&self) -> &'static str {
        "hardcoded"
    }

    fn native_token_price(&self) -> Option<f64> {
        self.native_price
    }

    fn token_price(&self, token: Address) -> Option<f64> {
        self.tokens
            .iter()
            .find(|(address, _)| *address == token)
            .map(|&(_, price)| price)
    }
}
