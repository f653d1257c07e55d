// Component template dataset
// Built offline by the dataset builder, consumed read-only at query time.


use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::Result;

/// Catalog entry describing one presentational component: its name, source
/// location, and declared prop shape. `component_name` is the identity key
/// used during merges. Curated fields beyond the known ones survive in
/// `extra` so a rebuild never drops hand-authored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub component_name: String,
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub props: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ComponentRecord {
    #[inline]
    pub fn new(component_name: impl Into<String>, filepath: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            filepath: filepath.into(),
            props: BTreeMap::new(),
            description: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Text embedded for retrieval: the name, the curated description when
    /// present, and the declared prop names.
    #[inline]
    pub fn embedding_text(&self) -> String {
        let mut text = self.component_name.clone();
        if let Some(description) = &self.description {
            text.push_str(": ");
            text.push_str(description);
        }
        if !self.props.is_empty() {
            text.push_str(". Props: ");
            let names: Vec<&str> = self.props.keys().map(String::as_str).collect();
            text.push_str(&names.join(", "));
        }
        text
    }
}

/// Merge policy for a rebuild: freshly generated `props` and `filepath`
/// always overwrite the base record's, while every curated field the base
/// carries (description, extras) is preserved.
#[inline]
pub fn merge_record(base: &ComponentRecord, generated: &ComponentRecord) -> ComponentRecord {
    ComponentRecord {
        component_name: base.component_name.clone(),
        filepath: generated.filepath.clone(),
        props: generated.props.clone(),
        description: base
            .description
            .clone()
            .or_else(|| generated.description.clone()),
        extra: base.extra.clone(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub updated: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub components: Vec<ComponentRecord>,
}

impl Dataset {
    /// Load a dataset file. A missing or malformed file degrades to an empty
    /// dataset with a warning; the build must never abort because the curated
    /// base is absent.
    #[inline]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("Dataset file {} does not exist, starting empty", path.display());
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to read dataset file {}, treating as empty: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(
                    "Failed to parse dataset file {}, treating as empty: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Persist as pretty-printed JSON so the file stays human-diffable.
    #[inline]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create dataset directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize dataset")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write dataset file: {}", path.display()))?;

        debug!(
            "Saved dataset with {} components to {}",
            self.components.len(),
            path.display()
        );
        Ok(())
    }

    #[inline]
    pub fn get(&self, component_name: &str) -> Option<&ComponentRecord> {
        self.components
            .iter()
            .find(|record| record.component_name == component_name)
    }

    /// Merge generated records in by `component_name`: existing records go
    /// through [`merge_record`], unknown names are inserted as-is.
    #[inline]
    pub fn merge_generated(&mut self, generated: Vec<ComponentRecord>) -> MergeStats {
        let mut stats = MergeStats::default();

        for record in generated {
            if let Some(existing) = self
                .components
                .iter_mut()
                .find(|existing| existing.component_name == record.component_name)
            {
                *existing = merge_record(existing, &record);
                stats.updated += 1;
            } else {
                self.components.push(record);
                stats.added += 1;
            }
        }

        stats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
