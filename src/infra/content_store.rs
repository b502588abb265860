//! Filesystem-backed content collection.
//!
//! A collection is a directory of Markdown/MDX documents, each opening with a
//! YAML front-matter block delimited by `---` lines.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::config::ContentSettings;
use crate::domain::{
    content::{ContentItem, DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_TAG},
    dates::parse_front_matter_date,
    slug::{SlugError, derive_slug, slug_for_path},
};

const FRONT_MATTER_DELIMITER: &str = "---";
const READ_CONCURRENCY: usize = 16;

#[derive(Debug, Error)]
pub enum ContentStoreError {
    #[error("content directory `{}` does not exist", path.display())]
    MissingRoot { path: PathBuf },
    #[error("failed to read `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid front matter in `{}`: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },
    #[error("cannot derive slug for `{}`", path.display())]
    Slug {
        path: PathBuf,
        #[source]
        source: SlugError,
    },
    #[error("failed to walk `{}`", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("slug `{slug}` is used by both `{}` and `{}`", first.display(), second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl ContentStoreError {
    fn front_matter(path: &Path, message: impl Into<String>) -> Self {
        Self::FrontMatter {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    meta_title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default = "default_author")]
    author: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "default_tags")]
    tags: Vec<String>,
    #[serde(default)]
    draft: Option<bool>,
    #[serde(default)]
    weight: Option<i64>,
    #[serde(default)]
    slug: Option<String>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_tags() -> Vec<String> {
    vec![DEFAULT_TAG.to_string()]
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    extensions: Vec<String>,
    include_drafts: bool,
}

impl ContentStore {
    pub fn new(settings: &ContentSettings) -> Self {
        Self {
            root: settings.directory.clone(),
            extensions: settings.extensions.clone(),
            include_drafts: settings.include_drafts,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read every document under the root, sorted by slug.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub async fn load(&self) -> Result<Vec<ContentItem>, ContentStoreError> {
        if !self.root.is_dir() {
            return Err(ContentStoreError::MissingRoot {
                path: self.root.clone(),
            });
        }

        let paths = self.document_paths()?;
        let documents: Vec<(&Path, String)> = stream::iter(&paths)
            .map(|path| async move {
                tokio::fs::read_to_string(path)
                    .await
                    .map(|source| (path.as_path(), source))
                    .map_err(|source| ContentStoreError::Read {
                        path: path.clone(),
                        source,
                    })
            })
            .buffered(READ_CONCURRENCY)
            .try_collect()
            .await?;

        let mut items = Vec::with_capacity(documents.len());
        let mut owners: HashMap<String, PathBuf> = HashMap::new();

        for (path, source) in documents {
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let mut item = parse_document(relative, &source)?;
            if item.draft && !self.include_drafts {
                debug!(path = %path.display(), "skipping draft");
                continue;
            }
            if let Some(first) = owners.insert(item.slug.clone(), path.to_path_buf()) {
                return Err(ContentStoreError::DuplicateSlug {
                    slug: item.slug,
                    first,
                    second: path.to_path_buf(),
                });
            }
            item.source = Some(path.to_path_buf());
            items.push(item);
        }

        items.sort_by(|a, b| a.slug.cmp(&b.slug));
        info!(count = items.len(), "loaded content collection");
        Ok(items)
    }

    fn document_paths(&self) -> Result<Vec<PathBuf>, ContentStoreError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|source| ContentStoreError::Walk {
                path: source
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf),
                source,
            })?;
            if entry.file_type().is_file() && self.has_content_extension(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }

    fn has_content_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
    }
}

/// Build a content item from one document. `relative` is the path below the
/// collection root and decides the slug unless the front matter sets one.
pub fn parse_document(relative: &Path, source: &str) -> Result<ContentItem, ContentStoreError> {
    let yaml = split_front_matter(source)
        .ok_or_else(|| ContentStoreError::front_matter(relative, "missing `---` block"))?;
    let front: FrontMatter = serde_yaml::from_str(yaml)
        .map_err(|err| ContentStoreError::front_matter(relative, err.to_string()))?;

    let slug = match front.slug.as_deref() {
        Some(explicit) => derive_slug(explicit),
        None => slug_for_path(relative),
    }
    .map_err(|source| ContentStoreError::Slug {
        path: relative.to_path_buf(),
        source,
    })?;

    let date = front
        .date
        .as_deref()
        .map(parse_front_matter_date)
        .transpose()
        .map_err(|err| ContentStoreError::front_matter(relative, err.to_string()))?;

    let category = Some(front.category).filter(|value| !value.trim().is_empty());

    Ok(ContentItem {
        slug,
        title: front.title,
        meta_title: front.meta_title,
        category,
        tags: front.tags,
        description: front.description,
        date,
        weight: front.weight,
        author: Some(front.author),
        image: front.image,
        draft: front.draft.unwrap_or(false),
        source: None,
    })
}

fn split_front_matter(source: &str) -> Option<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FRONT_MATTER_DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Some(&source[start..offset]);
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_front_matter_with_defaults() {
        let source = "---\ntitle: Hello\n---\nBody text\n";
        let item = parse_document(Path::new("Hello World.md"), source).expect("document");

        assert_eq!(item.slug, "hello-world");
        assert_eq!(item.title, "Hello");
        assert_eq!(item.category.as_deref(), Some(DEFAULT_CATEGORY));
        assert_eq!(item.tags, vec![DEFAULT_TAG.to_string()]);
        assert_eq!(item.author.as_deref(), Some(DEFAULT_AUTHOR));
        assert!(!item.draft);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let source = "---\n\
title: DuckDB\n\
meta_title: DuckDB for analysts\n\
slug: Custom Slug\n\
category: DE\n\
tags: [sql, duckdb]\n\
date: 2024-02-03\n\
weight: 2\n\
draft: true\n\
---\n";
        let item = parse_document(Path::new("posts/duckdb.mdx"), source).expect("document");

        assert_eq!(item.slug, "custom-slug");
        assert_eq!(item.meta_title.as_deref(), Some("DuckDB for analysts"));
        assert_eq!(item.category.as_deref(), Some("DE"));
        assert_eq!(item.tags, vec!["sql".to_string(), "duckdb".to_string()]);
        assert_eq!(item.date, Some(date!(2024 - 02 - 03)));
        assert_eq!(item.weight, Some(2));
        assert!(item.draft);
    }

    #[test]
    fn missing_front_matter_is_reported() {
        let error = parse_document(Path::new("plain.md"), "# Just markdown\n").expect_err("no yaml");
        assert!(matches!(error, ContentStoreError::FrontMatter { .. }));
    }

    #[test]
    fn missing_title_is_reported() {
        let error =
            parse_document(Path::new("untitled.md"), "---\ncategory: DE\n---\n").expect_err("title");
        assert!(error.to_string().contains("untitled.md"));
    }

    #[test]
    fn unterminated_block_is_rejected() {
        assert_eq!(split_front_matter("---\ntitle: x\n"), None);
        assert_eq!(split_front_matter("---\ntitle: x\n---"), Some("title: x\n"));
    }
}
