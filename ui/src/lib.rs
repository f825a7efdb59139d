//! This crate contains all shared UI components for the portfolio site.

pub mod app;
pub use app::Portfolio;

pub mod components;
pub mod contact;
pub mod services;
pub mod utils;
