// In-memory vector index with JSON persistence
// Linear-scan cosine search; component counts stay in the low hundreds,
// so no approximate-NN structure is used.


use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{Result, UidexError};

/// Bumped whenever the persisted layout changes (including an embedding
/// model change that alters dimensionality).
pub const INDEX_SCHEMA_VERSION: u32 = 1;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Cosine similarity between two vectors of equal dimension.
///
/// Returns 0.0 when either vector has zero norm. A dimension mismatch is a
/// hard error rather than a silently-truncated comparison.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(UidexError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// One stored vector with its opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry<T> {
    pub vector: Vec<f32>,
    pub item: T,
}

/// A scored search result borrowed from the index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a, T> {
    pub item: &'a T,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorIndex<T> {
    version: u32,
    dimension: Option<usize>,
    entries: Vec<IndexEntry<T>>,
}

impl<T> Default for VectorIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VectorIndex<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            version: INDEX_SCHEMA_VERSION,
            dimension: None,
            entries: Vec::new(),
        }
    }

    /// Append an entry. The first vector fixes the index dimension; every
    /// later `add` must match it so similarity scores stay meaningful.
    #[inline]
    pub fn add(&mut self, vector: Vec<f32>, item: T) -> Result<()> {
        match self.dimension {
            Some(dimension) if vector.len() != dimension => {
                return Err(UidexError::DimensionMismatch {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
            Some(_) => {}
            None => self.dimension = Some(vector.len()),
        }

        self.entries.push(IndexEntry { vector, item });
        Ok(())
    }

    /// Linear-scan nearest neighbors by cosine similarity, sorted descending.
    /// Ties keep insertion order (the sort is stable). Returns at most
    /// `limit` hits.
    #[inline]
    pub fn search(&self, query: &[f32], limit: usize) -> Result<Vec<SearchHit<'_, T>>> {
        if let Some(dimension) = self.dimension {
            if query.len() != dimension {
                return Err(UidexError::DimensionMismatch {
                    expected: dimension,
                    actual: query.len(),
                });
            }
        }

        let mut hits: Vec<SearchHit<'_, T>> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let score = cosine_similarity(query, &entry.vector)?;
            hits.push(SearchHit {
                item: &entry.item,
                score,
            });
        }

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);

        Ok(hits)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    #[inline]
    pub fn entries(&self) -> &[IndexEntry<T>] {
        &self.entries
    }
}

/// Load a persisted index, returning `Ok(None)` when the file does not exist.
#[inline]
pub fn load_index<T: DeserializeOwned>(path: &Path) -> Result<Option<VectorIndex<T>>> {
    if !path.exists() {
        debug!("Index file {} does not exist", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;

    let index: VectorIndex<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse index file: {}", path.display()))?;

    if index.version != INDEX_SCHEMA_VERSION {
        return Err(UidexError::IndexSchema(format!(
            "{} has schema version {}, expected {}",
            path.display(),
            index.version,
            INDEX_SCHEMA_VERSION
        )));
    }

    debug!(
        "Loaded index with {} entries from {}",
        index.entries.len(),
        path.display()
    );
    Ok(Some(index))
}

/// Persist an index as pretty-printed JSON, overwriting any existing file.
#[inline]
pub fn save_index<T: Serialize>(index: &VectorIndex<T>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create index directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(index).context("Failed to serialize index")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write index file: {}", path.display()))?;

    debug!(
        "Saved index with {} entries to {}",
        index.entries.len(),
        path.display()
    );
    Ok(())
}
