//! Operator tooling for the chain registry.
//!
//! Resolves chains from the command line, loads per-chain RPC overrides and
//! probes RPC endpoints of the registered networks.

pub mod chains;
pub mod config;
pub mod probe;
