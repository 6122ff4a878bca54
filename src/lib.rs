pub mod config;
pub mod error;
pub mod path_lister;
pub mod sample_driver;
pub mod text_extractor;
pub mod utils;

pub use config::{NoiseSpec, SampleConfig};
pub use error::{ListError, ScrapeError, ScrapeResult};
pub use path_lister::list_html_files;
pub use sample_driver::{SampleDriver, SampleReport};
pub use text_extractor::{Extract, TextExtractor, extract_text, normalize_text};

/// Sample `config.root()` and print the extracted articles to stdout.
pub fn sample(config: &SampleConfig) -> ScrapeResult<SampleReport> {
    let stdout = std::io::stdout();
    sample_driver::run(config, &mut stdout.lock())
}
