//! Domain layer types and invariants.

pub mod categories;
pub mod content;
pub mod dates;
pub mod error;
pub mod slug;
pub mod text;
