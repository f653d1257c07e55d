
use std::hash::{DefaultHasher, Hash, Hasher};
use tracing::debug;

use crate::Result;
use crate::embeddings::EmbeddingProvider;

/// Deterministic pseudo-random embeddings for development and tests.
///
/// Vectors are seeded from the input text, so the same text always maps to
/// the same vector and search stays stable across runs. The scores carry no
/// semantic meaning; this provider is only substituted when the config
/// explicitly allows it.
#[derive(Debug, Clone)]
pub struct FallbackProvider {
    dimension: usize,
}

impl FallbackProvider {
    #[inline]
    pub fn new(dimension: usize) -> Self {
        debug!("Creating fallback embedding provider ({} dimensions)", dimension);
        Self { dimension }
    }
}

fn seed_from_text(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    // xorshift breaks down on a zero state
    hasher.finish().max(1)
}

fn next_xorshift(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

impl EmbeddingProvider for FallbackProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut state = seed_from_text(text);
        let vector = (0..self.dimension)
            .map(|_| {
                let bits = next_xorshift(&mut state);
                // Map the top 53 bits to [-1, 1)
                (bits >> 11) as f32 / (1u64 << 53) as f32 * 2.0 - 1.0
            })
            .collect();
        Ok(vector)
    }

    fn embed_many(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
