//! Shared configuration constants for wikiscrape
//!
//! Default values used by the extractor, the path lister, and the sampler,
//! kept in one place to avoid magic strings scattered across modules.

/// Default number of articles drawn per sampling run
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// `id` of the element holding the article body in a Wikipedia export
pub const CONTENT_REGION_ID: &str = "bodyContent";

/// Extension of the archive files the lister picks up
pub const HTML_EXTENSION: &str = "html";

/// Editor backup / swap files carry this character somewhere in their path
pub const BACKUP_MARKER: char = '~';

/// Line printed before each sampled article
pub const SAMPLE_SEPARATOR: &str = "*~*~*~*~*~*~*~*~*~*~*~*~*~*~*~*~*~*~*~*~";
