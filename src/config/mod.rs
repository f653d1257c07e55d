// Configuration management module
// TOML settings for the embedding provider, library roots, and output paths

pub mod settings;

pub use settings::{Config, ConfigError, EmbeddingsConfig, LibraryConfig, OllamaConfig};

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    Config::config_dir()
}
