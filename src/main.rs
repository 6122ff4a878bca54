// Wikipedia archive sampler
//
// Prints the extracted prose of a few randomly drawn pages from an offline
// Wikipedia HTML export. Also extracts a single page or lists the archive.

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_tools_wikiscrape::utils::DEFAULT_SAMPLE_SIZE;
use kodegen_tools_wikiscrape::{
    NoiseSpec, SampleConfig, ScrapeError, TextExtractor, list_html_files,
};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kodegen-wikiscrape")]
#[command(version)]
#[command(about = "Sample and print article text from an offline Wikipedia HTML export")]
struct Args {
    /// Archive root directory (defaults to the current directory)
    root: Option<PathBuf>,

    /// Number of pages to draw
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the boilerplate removal rules
    #[arg(long, value_name = "JSON")]
    noise_spec: Option<PathBuf>,

    /// Print every listed page path instead of sampling
    #[arg(long, conflicts_with = "file")]
    list: bool,

    /// Extract a single page and print only its text
    #[arg(long, value_name = "HTML")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Report goes to stdout, diagnostics to stderr
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    exit_code(run(args), &mut io::stderr())
}

/// One-line diagnostic on failure
fn exit_code<W: Write>(result: Result<()>, err: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let noise = match &args.noise_spec {
        Some(path) => NoiseSpec::from_json_file(path)?,
        None => NoiseSpec::default(),
    };

    if let Some(file) = &args.file {
        let bytes =
            std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
        let text = TextExtractor::new(noise).extract(&String::from_utf8_lossy(&bytes));
        return ignore_broken_pipe(write_page(&mut io::stdout().lock(), &text));
    }

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    if args.list {
        let paths = list_html_files(&root)?;
        return ignore_broken_pipe(write_listing(&mut io::stdout().lock(), &paths));
    }

    let config = SampleConfig::builder()
        .root(root)
        .sample_size(args.sample_size)
        .seed(args.seed)
        .noise(noise)
        .build()?;

    match kodegen_tools_wikiscrape::sample(&config) {
        Ok(_) => Ok(()),
        Err(e) if e.is_invalid_root() => Err(e.into()),
        Err(ScrapeError::Output(e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("sampling run failed"),
    }
}

fn write_page<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")
}

fn write_listing<W: Write>(out: &mut W, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

/// A reader that hung up early (`| head`) is not a failure
fn ignore_broken_pipe(result: io::Result<()>) -> Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}
