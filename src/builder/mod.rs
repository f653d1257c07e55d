// Offline dataset build
// Scans the component libraries, extracts prop shapes, merges with the
// curated base dataset, and embeds one description per component into a
// fresh vector index. Runs sequentially; component counts are small enough
// that batching embeddings buys nothing observable.


use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::Result;
use crate::config::Config;
use crate::dataset::{ComponentRecord, Dataset};
use crate::embeddings::EmbeddingProvider;
use crate::extract::{PropExtractor, RegexPropExtractor};
use crate::index::{VectorIndex, save_index};

const COMPONENT_EXTENSIONS: [&str; 3] = ["tsx", "jsx", "ts"];

/// What to do when embedding a single component fails mid-build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Fail the whole build on the first embedding error.
    Abort,
    /// Log the failure, leave the component out of the index, and keep going.
    SkipAndContinue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub files_scanned: usize,
    pub components_added: usize,
    pub components_updated: usize,
    pub embedded: usize,
    pub skipped: usize,
}

pub struct DatasetBuilder<'a> {
    config: &'a Config,
    provider: &'a dyn EmbeddingProvider,
    extractor: Box<dyn PropExtractor>,
    error_policy: ErrorPolicy,
}

impl<'a> DatasetBuilder<'a> {
    #[inline]
    pub fn new(config: &'a Config, provider: &'a dyn EmbeddingProvider) -> Self {
        Self {
            config,
            provider,
            extractor: Box::new(RegexPropExtractor::new()),
            error_policy: ErrorPolicy::Abort,
        }
    }

    #[inline]
    pub fn with_extractor(mut self, extractor: Box<dyn PropExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    #[inline]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Run the full build and persist the dataset and index under the
    /// config base directory.
    #[inline]
    pub fn build(&self) -> Result<BuildReport> {
        let mut report = BuildReport::default();

        let mut files = scan_library(&self.config.system_dir_path());
        files.extend(scan_library(&self.config.ui_dir_path()));
        report.files_scanned = files.len();
        info!("Found {} component files", files.len());

        let project_root = self.config.library.project_root.clone();
        let mut generated = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(record) = self.record_from_file(file, &project_root) {
                generated.push(record);
            }
        }

        let base_path = self.config.base_dataset_path();
        let mut dataset = Dataset::load(&base_path);
        debug!(
            "Loaded base dataset with {} components from {}",
            dataset.len(),
            base_path.display()
        );

        let stats = dataset.merge_generated(generated);
        report.components_added = stats.added;
        report.components_updated = stats.updated;

        let mut index = VectorIndex::new();
        for record in &dataset.components {
            match self.provider.embed(&record.embedding_text()) {
                Ok(vector) => {
                    index.add(vector, record.clone())?;
                    report.embedded += 1;
                }
                Err(e) => match self.error_policy {
                    ErrorPolicy::Abort => {
                        return Err(e);
                    }
                    ErrorPolicy::SkipAndContinue => {
                        warn!(
                            "Skipping component {} after embedding failure: {}",
                            record.component_name, e
                        );
                        report.skipped += 1;
                    }
                },
            }
        }

        dataset.save(&self.config.dataset_path())?;
        save_index(&index, &self.config.index_path())?;

        info!(
            "Build complete: {} files scanned, {} added, {} updated, {} embedded, {} skipped",
            report.files_scanned,
            report.components_added,
            report.components_updated,
            report.embedded,
            report.skipped
        );

        Ok(report)
    }

    fn record_from_file(&self, path: &Path, project_root: &Path) -> Option<ComponentRecord> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                warn!("Failed to read {}, skipping: {}", path.display(), e);
                return None;
            }
        };

        let component_name = path.file_stem()?.to_string_lossy().to_string();
        let mut record =
            ComponentRecord::new(component_name, relative_filepath(project_root, path));
        record.props = self.extractor.extract_props(&source);
        Some(record)
    }
}

/// Recursively enumerate component source files under a library root.
/// A missing root contributes zero files with a warning; it never aborts
/// the build. Results are sorted so records land in a stable order.
#[inline]
pub fn scan_library(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!(
            "Component library {} does not exist, skipping",
            root.display()
        );
        return Vec::new();
    }

    let mut files = Vec::new();
    collect_component_files(root, &mut files);
    files.sort();
    files
}

fn collect_component_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_component_files(&path, files);
        } else if is_component_file(&path) {
            files.push(path);
        }
    }
}

fn is_component_file(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy());
    if name.is_some_and(|n| n.ends_with(".d.ts")) {
        return false;
    }
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| COMPONENT_EXTENSIONS.contains(&ext.as_ref()))
}

/// Path relative to the project root with `/` separators, matching how the
/// dataset records filepaths across platforms.
fn relative_filepath(project_root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(project_root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build with a freshly constructed provider and default policies; the CLI
/// entry point.
#[inline]
pub fn run_build(
    config: &Config,
    provider: &dyn EmbeddingProvider,
    skip_errors: bool,
) -> Result<BuildReport> {
    let policy = if skip_errors {
        ErrorPolicy::SkipAndContinue
    } else {
        ErrorPolicy::Abort
    };

    DatasetBuilder::new(config, provider)
        .with_error_policy(policy)
        .build()
        .context("Dataset build failed")
        .map_err(Into::into)
}
