// Query-time retrieval over a built index
// Read-only: the index is built offline and never mutated while serving, so
// concurrent queries are safe.


use tracing::debug;

use crate::Result;
use crate::dataset::ComponentRecord;
use crate::embeddings::EmbeddingProvider;
use crate::index::{DEFAULT_SEARCH_LIMIT, VectorIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedComponent {
    pub record: ComponentRecord,
    pub score: f32,
}

pub struct Retriever<'a> {
    provider: &'a dyn EmbeddingProvider,
    index: &'a VectorIndex<ComponentRecord>,
}

impl<'a> Retriever<'a> {
    #[inline]
    pub fn new(
        provider: &'a dyn EmbeddingProvider,
        index: &'a VectorIndex<ComponentRecord>,
    ) -> Self {
        Self { provider, index }
    }

    /// Embed the requirement text and return the closest component
    /// templates, best first.
    #[inline]
    pub fn query(&self, text: &str, limit: usize) -> Result<Vec<RetrievedComponent>> {
        let query_vector = self.provider.embed(text)?;
        let hits = self.index.search(&query_vector, limit)?;

        debug!(
            "Retrieved {} components for query (length: {})",
            hits.len(),
            text.len()
        );

        Ok(hits
            .into_iter()
            .map(|hit| RetrievedComponent {
                record: hit.item.clone(),
                score: hit.score,
            })
            .collect())
    }

    #[inline]
    pub fn query_default(&self, text: &str) -> Result<Vec<RetrievedComponent>> {
        self.query(text, DEFAULT_SEARCH_LIMIT)
    }
}
