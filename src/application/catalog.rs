use std::collections::BTreeMap;

use rand::Rng;
use tracing::info;

use crate::application::{
    related::{RankOptions, rank_related},
    sort::{SortOrder, sort_items},
    taxonomy::{Taxonomy, filter_by_taxonomy},
};
use crate::domain::{
    content::{ContentItem, find_by_slug},
    error::DomainError,
};

/// An immutable, loaded content collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, slug: &str) -> Result<&ContentItem, DomainError> {
        find_by_slug(&self.items, slug).ok_or_else(|| DomainError::not_found(slug))
    }

    pub fn related<R>(
        &self,
        slug: &str,
        options: &RankOptions,
        rng: &mut R,
    ) -> Result<Vec<&ContentItem>, DomainError>
    where
        R: Rng + ?Sized,
    {
        let current = self.get(slug)?;
        Ok(rank_related(current, &self.items, options, rng))
    }

    /// Related slugs for every item, keyed by slug.
    pub fn related_index<R>(
        &self,
        options: &RankOptions,
        rng: &mut R,
    ) -> BTreeMap<String, Vec<String>>
    where
        R: Rng + ?Sized,
    {
        let index: BTreeMap<String, Vec<String>> = self
            .items
            .iter()
            .map(|item| {
                let related = rank_related(item, &self.items, options, rng)
                    .into_iter()
                    .map(|related| related.slug.clone())
                    .collect();
                (item.slug.clone(), related)
            })
            .collect();
        info!(entries = index.len(), "built related-content index");
        index
    }

    pub fn taxonomy(&self, taxonomy: Taxonomy, key: &str, order: SortOrder) -> Vec<&ContentItem> {
        sort_items(filter_by_taxonomy(&self.items, taxonomy, key), order)
    }

    pub fn listing(&self, order: SortOrder) -> Vec<&ContentItem> {
        sort_items(self.items.iter().collect(), order)
    }
}
