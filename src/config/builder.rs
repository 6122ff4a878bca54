//! Type-safe builder for `SampleConfig` using the typestate pattern
//!
//! The archive root is required; `build()` only exists once it is set.

use anyhow::{Context, Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{NoiseSpec, SampleConfig};
use crate::utils::DEFAULT_SAMPLE_SIZE;

// Type states for the builder
pub struct WithRoot;

pub struct SampleConfigBuilder<State = ()> {
    pub(crate) root: Option<PathBuf>,
    pub(crate) sample_size: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) noise: NoiseSpec,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SampleConfigBuilder<()> {
    fn default() -> Self {
        Self {
            root: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            noise: NoiseSpec::default(),
            _phantom: PhantomData,
        }
    }
}

impl SampleConfig {
    /// Create a builder for configuring a `SampleConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SampleConfigBuilder<()> {
        SampleConfigBuilder::default()
    }
}

impl SampleConfigBuilder<()> {
    pub fn root(self, root: impl Into<PathBuf>) -> SampleConfigBuilder<WithRoot> {
        SampleConfigBuilder {
            root: Some(root.into()),
            sample_size: self.sample_size,
            seed: self.seed,
            noise: self.noise,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the root is set
impl SampleConfigBuilder<WithRoot> {
    pub fn build(self) -> Result<SampleConfig> {
        let root = self.root.ok_or_else(|| anyhow!("root is required"))?;
        let root = std::path::absolute(&root)
            .with_context(|| format!("failed to resolve archive root {}", root.display()))?;

        Ok(SampleConfig {
            root,
            sample_size: self.sample_size,
            seed: self.seed,
            noise: self.noise,
        })
    }
}

// Optional settings, available in any state
impl<State> SampleConfigBuilder<State> {
    /// Number of articles to draw. Clamped to the archive size at run time;
    /// `0` draws nothing.
    #[must_use]
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Seed the sampler for reproducible draws
    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn noise(mut self, noise: NoiseSpec) -> Self {
        self.noise = noise;
        self
    }
}
