//! Slug derivation for content paths and taxonomy keys.
//!
//! Item slugs come from the collection-relative file path (each segment
//! slugified, joined by `/`), and taxonomy lookups compare slugified labels so
//! `"Cloud DevOps"`, `"cloud-devops"` and `"CLOUD_devops"` address the same
//! bucket.

use std::path::{Component, Path};

use slug::slugify;
use thiserror::Error;

/// Errors that can occur while generating a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a slug from the provided human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);

    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Slug for a file relative to its collection root, without extension.
///
/// `2024/DuckDB Intro.md` becomes `2024/duckdb-intro`.
pub fn slug_for_path(relative: &Path) -> Result<String, SlugError> {
    let stem = relative.with_extension("");
    let mut segments = Vec::new();

    for component in stem.components() {
        if let Component::Normal(segment) = component {
            let text = segment.to_string_lossy();
            segments.push(derive_slug(&text)?);
        }
    }

    if segments.is_empty() {
        return Err(SlugError::EmptyInput);
    }

    Ok(segments.join("/"))
}

/// Normalised form used when matching taxonomy labels against a lookup key.
///
/// Labels that cannot be slugified (e.g. only punctuation) yield an empty key
/// and therefore never match.
pub fn taxonomy_key(label: &str) -> String {
    slugify(label).to_lowercase()
}
