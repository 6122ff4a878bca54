//! Core configuration types for extraction and sampling
//!
//! `NoiseSpec` describes which parts of a Wikipedia page are boilerplate,
//! `SampleConfig` describes one sampling run over an archive.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::CONTENT_REGION_ID;

/// Boilerplate removal rules applied before the article body is read out.
///
/// The four rule lists are independent and always applied in field order:
/// tags, ids, div markers, span markers. A *marker* matches an element when
/// it is one of the element's `class` tokens or equals its `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSpec {
    /// Elements with these tag names keep their node but lose their contents
    pub emptied_tags: Vec<String>,
    /// Elements with these `id` values keep their node but lose their contents
    pub emptied_ids: Vec<String>,
    /// `div` elements carrying these markers are detached with their subtree
    pub removed_div_markers: Vec<String>,
    /// `span` elements carrying these markers are detached with their subtree
    pub removed_span_markers: Vec<String>,
    /// `id` of the element whose text becomes the extracted article
    pub content_region_id: String,
}

impl Default for NoiseSpec {
    fn default() -> Self {
        Self {
            emptied_tags: ["ul", "li", "table", "script"].map(String::from).to_vec(),
            emptied_ids: ["siteSub", "catlinks"].map(String::from).to_vec(),
            removed_div_markers: vec!["noprint".to_string()],
            removed_span_markers: vec!["mw-headline".to_string()],
            content_region_id: CONTENT_REGION_ID.to_string(),
        }
    }
}

impl NoiseSpec {
    /// Load rules from a JSON file. Missing fields fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read noise spec {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse noise spec {}", path.display()))
    }

    #[must_use]
    pub fn empties_tag(&self, tag: &str) -> bool {
        self.emptied_tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn empties_id(&self, id: &str) -> bool {
        self.emptied_ids.iter().any(|i| i == id)
    }
}

/// Configuration for one sampling run over an archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Archive root.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder).
    pub(crate) root: PathBuf,
    pub(crate) sample_size: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) noise: NoiseSpec,
}

impl SampleConfig {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn noise(&self) -> &NoiseSpec {
        &self.noise
    }
}
