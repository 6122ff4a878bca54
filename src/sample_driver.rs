//! Random sampling of archive pages for inspection.
//!
//! Draws a handful of pages from an archive, extracts each one and prints the
//! path and text to a writer. Useful for eyeballing extraction quality over a
//! large export without processing all of it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SampleConfig;
use crate::error::ScrapeResult;
use crate::path_lister::list_html_files;
use crate::text_extractor::{Extract, TextExtractor};
use crate::utils::SAMPLE_SEPARATOR;

/// Outcome of one sampling run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleReport {
    /// Pages found under the root
    pub listed: usize,
    /// Pages read and extracted, in draw order (duplicates possible)
    pub extracted: Vec<PathBuf>,
    /// Pages that could not be read, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

pub struct SampleDriver<E = TextExtractor> {
    extractor: E,
    sample_size: usize,
}

impl<E: Extract> SampleDriver<E> {
    #[must_use]
    pub fn new(extractor: E, sample_size: usize) -> Self {
        Self {
            extractor,
            sample_size,
        }
    }

    /// List `root` and sample from it.
    ///
    /// # Errors
    ///
    /// Fails if `root` is missing or not a directory, or if writing to `out`
    /// fails. Unreadable pages are skipped, not errors.
    pub fn run<R, W>(&self, root: &Path, rng: &mut R, out: &mut W) -> ScrapeResult<SampleReport>
    where
        R: Rng,
        W: Write,
    {
        let paths = list_html_files(root)?;
        let mut report = self.sample_paths(&paths, rng, out)?;
        report.listed = paths.len();
        Ok(report)
    }

    /// Draw `min(sample_size, paths.len())` pages uniformly, with replacement,
    /// and print each one's extracted text.
    ///
    /// # Errors
    ///
    /// Fails only if writing to `out` fails.
    pub fn sample_paths<R, W>(
        &self,
        paths: &[PathBuf],
        rng: &mut R,
        out: &mut W,
    ) -> ScrapeResult<SampleReport>
    where
        R: Rng,
        W: Write,
    {
        let mut report = SampleReport {
            listed: paths.len(),
            ..SampleReport::default()
        };

        if paths.is_empty() {
            tracing::info!("No pages to sample");
            return Ok(report);
        }

        let count = self.sample_size.min(paths.len());
        for _ in 0..count {
            let path = &paths[rng.random_range(0..paths.len())];

            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable page");
                    report.skipped.push((path.clone(), e.to_string()));
                    continue;
                }
            };

            let text = self.extractor.extract(&String::from_utf8_lossy(&bytes));
            write_sample(out, path, &text)?;
            report.extracted.push(path.clone());
        }

        Ok(report)
    }
}

fn write_sample<W: Write>(out: &mut W, path: &Path, text: &str) -> std::io::Result<()> {
    writeln!(out, "{SAMPLE_SEPARATOR}")?;
    writeln!(out, "{}", path.display())?;
    writeln!(out, "\n\n\n")?;
    writeln!(out, "{text}")?;
    writeln!(out, "\n\n\n")?;
    Ok(())
}

/// Sample `config.root()` with a default-rules extractor, printing to `out`.
///
/// Uses a seeded RNG when the config carries a seed.
///
/// # Errors
///
/// See [`SampleDriver::run`].
pub fn run<W: Write>(config: &SampleConfig, out: &mut W) -> ScrapeResult<SampleReport> {
    let driver = SampleDriver::new(
        TextExtractor::new(config.noise().clone()),
        config.sample_size(),
    );

    let report = match config.seed() {
        Some(seed) => driver.run(config.root(), &mut StdRng::seed_from_u64(seed), out)?,
        None => driver.run(config.root(), &mut rand::rng(), out)?,
    };

    tracing::info!(
        listed = report.listed,
        extracted = report.extracted.len(),
        skipped = report.skipped.len(),
        "Sampling run finished"
    );
    Ok(report)
}
