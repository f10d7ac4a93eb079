//! # Domain Layer
//!
//! Core models and the error taxonomy shared by every layer.
//! This layer is independent of HTTP clients and the CLI.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
