//! Error types for registry lookups.

use thiserror::Error;

/// Errors returned by the chain registry.
#[derive(Debug, Error)]
pub enum Error {
    /// No record is documented for the requested chain ID.
    #[error("unknown chain ID {0}")]
    UnknownChain(u64),

    /// A public client was requested but no RPC URL could be resolved.
    #[error("no RPC URL configured for chain {0}")]
    NoRpcUrl(u64),

    /// The RPC URL could not be parsed.
    #[error("invalid RPC URL {url}: {source}")]
    InvalidRpcUrl {
        /// The offending URL.
        url: String,
        /// Underlying parse error.
        source: url::ParseError,
    },

    /// The registry tables violate a structural invariant.
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
