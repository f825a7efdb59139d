//! Infrastructure Services
//!
//! This module holds the outbound service clients used by the UI:
//!
//! - **relay**: form-relay client that forwards contact submissions via email
//!
//! The services are designed to be WASM-first, using browser-compatible HTTP
//! without Send/Sync bounds.

pub mod relay;

pub use relay::{ContactRequest, RelayClient, RelayError, RelayOutcome, RelayResponse};
