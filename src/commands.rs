use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::builder::run_build;
use crate::config::{Config, get_config_dir};
use crate::dataset::{ComponentRecord, Dataset};
use crate::embeddings::{OllamaClient, provider_from_config};
use crate::index::load_index;
use crate::props::normalize_sections;
use crate::retrieval::Retriever;

fn load_config() -> Result<Config> {
    let config_dir = get_config_dir()?;
    Config::load(config_dir)
}

/// Rebuild the component dataset and vector index
#[inline]
pub fn build_dataset(skip_errors: bool) -> Result<()> {
    let config = load_config()?;
    info!("Building dataset into {}", config.get_base_dir().display());

    let provider = provider_from_config(&config)?;
    let report = run_build(&config, provider.as_ref(), skip_errors)?;

    println!("Build complete");
    println!("  Component files scanned: {}", report.files_scanned);
    println!("  New components added: {}", report.components_added);
    println!("  Existing components updated: {}", report.components_updated);
    println!("  Components embedded: {}", report.embedded);
    if report.skipped > 0 {
        println!("  Components skipped after errors: {}", report.skipped);
    }
    println!("  Dataset: {}", config.dataset_path().display());
    println!("  Index: {}", config.index_path().display());

    Ok(())
}

/// Search the persisted index for components matching a requirement text
#[inline]
pub fn query_components(text: &str, limit: usize) -> Result<()> {
    let config = load_config()?;

    let index = load_index::<ComponentRecord>(&config.index_path())?
        .context("No index found. Run 'uidex build' first.")?;

    let provider = provider_from_config(&config)?;
    let retriever = Retriever::new(provider.as_ref(), &index);
    let results = retriever.query(text, limit)?;

    if results.is_empty() {
        println!("No matching components.");
        return Ok(());
    }

    println!("Top {} components for \"{}\":", results.len(), text);
    for result in &results {
        println!(
            "  {:.4}  {} ({})",
            result.score, result.record.component_name, result.record.filepath
        );
        if let Some(description) = &result.record.description {
            println!("          {}", description);
        }
    }

    Ok(())
}

/// Normalize a raw generation output file and print renderer-ready sections
#[inline]
pub fn normalize_file(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read generation output: {}", path.display()))?;

    let sections = normalize_sections(&raw)?;
    let output =
        serde_json::to_string_pretty(&sections).context("Failed to serialize sections")?;
    println!("{}", output);

    Ok(())
}

/// Print the effective configuration
#[inline]
pub fn show_config() -> Result<()> {
    let config = load_config()?;

    println!("Configuration ({})", config.config_file_path().display());
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    println!("{}", rendered);

    Ok(())
}

/// Show provider health and dataset/index state
#[inline]
pub fn show_status() -> Result<()> {
    let config = load_config()?;

    println!("uidex status");

    println!("Ollama:");
    match OllamaClient::new(&config.ollama) {
        Ok(client) => match client.health_check() {
            Ok(()) => {
                println!(
                    "  Connected ({}:{}), model {}",
                    config.ollama.host, config.ollama.port, config.ollama.model
                );
            }
            Err(e) => {
                println!("  Unhealthy: {}", e);
                if config.embeddings.allow_fallback {
                    println!("  Fallback embeddings are enabled");
                }
            }
        },
        Err(e) => {
            println!("  Failed to create client: {}", e);
        }
    }

    println!("Dataset:");
    let dataset_path = config.dataset_path();
    if dataset_path.exists() {
        let dataset = Dataset::load(&dataset_path);
        println!(
            "  {} components ({})",
            dataset.len(),
            dataset_path.display()
        );
    } else {
        println!("  Not built yet ({})", dataset_path.display());
    }

    println!("Index:");
    match load_index::<ComponentRecord>(&config.index_path()) {
        Ok(Some(index)) => {
            println!(
                "  {} entries, dimension {:?} ({})",
                index.len(),
                index.dimension(),
                config.index_path().display()
            );
        }
        Ok(None) => {
            println!("  Not built yet ({})", config.index_path().display());
        }
        Err(e) => {
            println!("  Unreadable: {}", e);
        }
    }

    Ok(())
}
