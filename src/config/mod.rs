//! Configuration module for sampling runs
//!
//! This module provides the `NoiseSpec` removal rules, the `SampleConfig`
//! struct, and its type-safe builder.

// Sub-modules
pub mod builder;
pub mod types;

// Re-exports for public API
pub use builder::{SampleConfigBuilder, WithRoot};
pub use types::{NoiseSpec, SampleConfig};
