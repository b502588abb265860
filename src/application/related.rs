//! Related-content ranking.
//!
//! Candidates are scored by category and tag overlap with the current item,
//! the top `limit` positive scores are kept, and that subset is shuffled so
//! equal-ish neighbours rotate between builds. The random source is always
//! supplied by the caller; seed it for reproducible output.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;
use tracing::debug;

use crate::domain::content::ContentItem;

pub const DEFAULT_LIMIT: usize = 3;
pub const DEFAULT_CATEGORY_WEIGHT: u32 = 3;
pub const DEFAULT_TAG_WEIGHT: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl RankError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Convert a signed limit into a result count, rejecting negatives.
pub fn validate_limit(limit: i64) -> Result<usize, RankError> {
    if limit < 0 {
        return Err(RankError::invalid_argument(
            "limit",
            format!("must be a non-negative integer, got {limit}"),
        ));
    }
    usize::try_from(limit)
        .map_err(|_| RankError::invalid_argument("limit", format!("{limit} is out of range")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub category: u32,
    pub tag: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY_WEIGHT,
            tag: DEFAULT_TAG_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    pub limit: usize,
    pub weights: Weights,
    /// Pad with zero-score candidates when too few items share any signal.
    pub fill_unscored: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            weights: Weights::default(),
            fill_unscored: false,
        }
    }
}

impl RankOptions {
    pub fn with_limit(limit: i64) -> Result<Self, RankError> {
        Ok(Self {
            limit: validate_limit(limit)?,
            ..Self::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub item: &'a ContentItem,
    pub score: u32,
}

/// Overlap score of `candidate` against `current`.
///
/// Category counts only when both sides carry one. Each distinct tag of
/// `current` found on the candidate counts once.
pub fn score(current: &ContentItem, candidate: &ContentItem, weights: Weights) -> u32 {
    let mut total: u32 = 0;

    if let (Some(mine), Some(theirs)) = (&current.category, &candidate.category)
        && mine == theirs
    {
        total = total.saturating_add(weights.category);
    }

    let candidate_tags: HashSet<&str> = candidate.tags.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    for tag in &current.tags {
        if seen.insert(tag.as_str()) && candidate_tags.contains(tag.as_str()) {
            total = total.saturating_add(weights.tag);
        }
    }

    total
}

/// Every candidate except `current`, scored, highest first.
///
/// Equal scores keep their input order; the ranker shuffles them later.
pub fn scored_candidates<'a>(
    current: &ContentItem,
    all: &'a [ContentItem],
    weights: Weights,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = all
        .iter()
        .filter(|item| item.slug != current.slug)
        .map(|item| ScoredCandidate {
            item,
            score: score(current, item, weights),
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Items related to `current`, at most `options.limit` of them.
///
/// The positive-score selection is returned in shuffled order. With
/// `fill_unscored`, a random sample of zero-score items trails it.
pub fn rank_related<'a, R>(
    current: &ContentItem,
    all: &'a [ContentItem],
    options: &RankOptions,
    rng: &mut R,
) -> Vec<&'a ContentItem>
where
    R: Rng + ?Sized,
{
    if options.limit == 0 {
        return Vec::new();
    }

    let scored = scored_candidates(current, all, options.weights);
    let (positive, unscored): (Vec<_>, Vec<_>) =
        scored.into_iter().partition(|candidate| candidate.score > 0);

    let mut selected: Vec<&'a ContentItem> = positive
        .iter()
        .take(options.limit)
        .map(|candidate| candidate.item)
        .collect();
    selected.shuffle(rng);

    if options.fill_unscored && selected.len() < options.limit {
        let remaining = options.limit - selected.len();
        let pool: Vec<&'a ContentItem> = unscored.iter().map(|candidate| candidate.item).collect();
        selected.extend(sample_random(&pool, remaining, rng).into_iter().copied());
    }

    debug!(
        slug = %current.slug,
        candidates = positive.len(),
        selected = selected.len(),
        "ranked related content"
    );

    selected
}

/// Uniformly random `n` elements of `items` (all of them, shuffled, when
/// `n >= items.len()`).
pub fn sample_random<'a, T, R>(items: &'a [T], n: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let mut shuffled: Vec<&'a T> = items.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(n);
    shuffled
}
