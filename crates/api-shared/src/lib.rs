//! # API Shared
//!
//! Shared utilities and definitions for Collaboro APIs.
//!
//! Contains:
//! - REST wire types (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `collaboro-run` binary for common
//! functionality. Wire types are plain serde structs with OpenAPI schemas;
//! translation from domain types lives next to the handlers in `api-rest`.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
