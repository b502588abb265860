//! Application services over a loaded content collection.

pub mod catalog;
pub mod error;
pub mod output;
pub mod related;
pub mod sort;
pub mod taxonomy;
