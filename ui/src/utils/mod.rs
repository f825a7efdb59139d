//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: email validation feedback helpers
//!
//! These utilities are designed to work consistently across WASM deployment
//! targets.

pub mod console_macros;
pub mod validation;

pub use validation::*;
