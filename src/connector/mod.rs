//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion over HTTP (OpenAI-compatible endpoints)
//! - Endpoint and credential configuration

pub mod adapter;
pub mod config;

pub use adapter::*;
pub use config::*;
