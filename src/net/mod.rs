//! Networking modules for the plan REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns request assembly and the transport seam, `api` names each
//! endpoint, `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
