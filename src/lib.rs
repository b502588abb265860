//! Related-content ranking and taxonomy lookups for a static blog's content
//! collection.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
