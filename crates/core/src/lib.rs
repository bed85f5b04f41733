//! Core types and rules for page-analyzer
//!
//! This crate contains the domain types shared across all other crates, the
//! URL validator and normalizer, and the process configuration.

mod config;
mod constants;
mod env_config;
mod error;
mod tracked_url;
mod url_input;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use tracked_url::*;
pub use url_input::*;
