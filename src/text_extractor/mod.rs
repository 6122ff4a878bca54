//! Article prose extraction from Wikipedia export pages.
//!
//! This module turns one HTML page into a single line of clean prose by:
//! 1. Parsing the page into a private, mutable DOM (kuchiki / html5ever)
//! 2. Stripping boilerplate according to a [`NoiseSpec`]
//! 3. Selecting the content region (`#bodyContent` by default)
//! 4. Reparsing that region on its own and reading its text (scraper)
//! 5. Removing bracket annotations and collapsing whitespace
//!
//! Malformed markup never fails: html5ever recovers and the result degrades to
//! partial or empty text. A page without a content region yields `""`.

mod noise;
pub mod normalize;

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;
use scraper::Html;
use std::sync::LazyLock;

use crate::config::NoiseSpec;

pub use normalize::normalize_text;

/// Anything that can turn raw page markup into article text.
///
/// The sampler depends on this rather than on [`TextExtractor`] directly.
pub trait Extract {
    fn extract(&self, html: &str) -> String;
}

impl<E: Extract + ?Sized> Extract for &E {
    fn extract(&self, html: &str) -> String {
        (**self).extract(html)
    }
}

/// Extractor holding its removal rules. Stateless between calls and `Sync`.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    noise: NoiseSpec,
}

static DEFAULT_EXTRACTOR: LazyLock<TextExtractor> = LazyLock::new(TextExtractor::default);

/// Extract article prose with the default Wikipedia rules.
///
/// # Example
/// ```
/// # use kodegen_tools_wikiscrape::extract_text;
/// let html = r#"<div id="bodyContent"><p>Hello <sup>[1]</sup> world</p></div>"#;
/// assert_eq!(extract_text(html), "Hello world");
/// ```
#[must_use]
pub fn extract_text(html: &str) -> String {
    DEFAULT_EXTRACTOR.extract(html)
}

impl TextExtractor {
    #[must_use]
    pub fn new(noise: NoiseSpec) -> Self {
        Self { noise }
    }

    /// Extract the cleaned prose of the content region, or `""` if the page
    /// has none.
    #[must_use]
    pub fn extract(&self, html: &str) -> String {
        let document = kuchiki::parse_html().one(html);

        let stats = noise::strip_noise(&document, &self.noise);
        tracing::debug!(
            emptied = stats.emptied,
            removed = stats.removed,
            "Stripped boilerplate elements"
        );

        let Some(region) = noise::find_by_id(&document, &self.noise.content_region_id) else {
            tracing::debug!(
                id = %self.noise.content_region_id,
                "No content region found, page yields no text"
            );
            return String::new();
        };

        normalize_text(&region_text(region.as_node()))
    }
}

impl Extract for TextExtractor {
    fn extract(&self, html: &str) -> String {
        TextExtractor::extract(self, html)
    }
}

/// Serialize the region and reparse it standalone, so any dangling tag state
/// from the surrounding page is closed off before text is read.
fn region_text(region: &NodeRef) -> String {
    let mut markup = Vec::new();
    if let Err(e) = region.serialize(&mut markup) {
        tracing::warn!(error = %e, "Failed to serialize content region, reading live subtree");
        return region.text_contents();
    }

    let markup = String::from_utf8_lossy(&markup);
    let fragment = Html::parse_fragment(&markup);
    fragment.root_element().text().collect()
}
