//! Infrastructure adapters and runtime bootstrap.

pub mod content_store;
pub mod error;
pub mod telemetry;
