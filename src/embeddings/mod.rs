// Embedding providers
// The provider is constructed once at startup and passed by reference to the
// dataset builder and retriever; there is no global client.


pub mod fallback;
pub mod ollama;

use tracing::warn;

use crate::config::Config;
use crate::{Result, UidexError};

pub use fallback::FallbackProvider;
pub use ollama::OllamaClient;

/// Converts text into fixed-dimensionality vectors. Fallible: network and
/// configuration failures surface as errors rather than fake vectors.
pub trait EmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn embed_many(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    fn dimension(&self) -> usize;

    fn name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn EmbeddingProvider {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProvider")
            .field("name", &self.name())
            .finish()
    }
}

/// Build the configured provider, health-checking Ollama first. When the
/// server is unreachable and `embeddings.allow_fallback` is set, a
/// deterministic fallback provider is substituted with a warning; otherwise
/// the failure is a `ProviderUnavailable` error for the caller to handle.
#[inline]
pub fn provider_from_config(config: &Config) -> Result<Box<dyn EmbeddingProvider>> {
    config.validate()?;

    let client = OllamaClient::new(&config.ollama)?;

    match client.health_check() {
        Ok(()) => Ok(Box::new(client)),
        Err(e) if config.embeddings.allow_fallback => {
            warn!(
                "Ollama unavailable ({}), using deterministic fallback embeddings",
                e
            );
            Ok(Box::new(FallbackProvider::new(
                config.ollama.embedding_dimension as usize,
            )))
        }
        Err(e) => Err(UidexError::ProviderUnavailable(format!(
            "Ollama at {}:{} failed health check: {}",
            config.ollama.host, config.ollama.port, e
        ))),
    }
}
