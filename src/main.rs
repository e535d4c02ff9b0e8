//! docanchor — report the documentation comments attached to declarations.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `docanchor < file.c`
//! - **file mode**: `docanchor -o docs/api src/*.c include/`

use anyhow::{Context, Result};
use clap::Parser;
use docanchor::lexer;
use docanchor::render::{self, Report};
use docanchor::{CommentLocator, ParamMode};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docanchor",
    about = "Report the documentation comments attached to declarations"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Keep every @param line instead of only the last one
    #[arg(long)]
    all_params: bool,

    /// Report comment locations only, without decoding them
    #[arg(long)]
    address_only: bool,

    /// Include declarations that have no documentation comment
    #[arg(long)]
    show_undocumented: bool,
}

impl Cli {
    fn locator(&self) -> CommentLocator {
        let mode = if self.all_params {
            ParamMode::All
        } else {
            ParamMode::LastOnly
        };
        CommentLocator::new().with_param_mode(mode)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DOCANCHOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read from stdin, write the rendered report to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let renderer = render::create_renderer(&cli.format)?;
    let report = build_report(cli, "<stdin>", &input)?;
    print!("{}", renderer.render(&report)?);
    Ok(())
}

/// file mode: process multiple files, write one report per file to the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    for path in &input_files {
        let source = path.to_string_lossy().to_string();
        let report = match fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
            .and_then(|content| build_report(cli, &source, &content))
        {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };

        if report.entries.is_empty() {
            tracing::debug!(source = %source, "no declarations to report");
            continue;
        }

        let name = derive_output_name(&source);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&report)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(output = %out_path.display(), entries = report.entries.len(), "wrote report");
    }

    Ok(())
}

fn build_report(cli: &Cli, source: &str, content: &str) -> Result<Report> {
    let buffer =
        lexer::tokenize(content).with_context(|| format!("failed to tokenize {}", source))?;
    let mut report = Report::collect(source, &buffer, &cli.locator(), cli.address_only);
    if !cli.show_undocumented {
        report.retain_documented();
    }
    Ok(report)
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "rs", "c", "h", "cpp", "hpp", "java", "js", "ts", "cs", "swift", "kt",
];

/// Resolve input arguments to source files, sorted and deduplicated.
///
/// Directories contribute their supported files one level deep; arguments
/// that name no file or directory are treated as glob patterns.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.insert(path.to_path_buf());
        } else if path.is_dir() {
            files.extend(sources_in_dir(path)?);
        } else {
            let mut matched = 0;
            for entry in glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
            {
                match entry {
                    Ok(p) if p.is_file() => {
                        matched += 1;
                        files.insert(p);
                    }
                    Ok(_) => {}
                    Err(e) => tracing::debug!("glob {}: {}", pattern, e),
                }
            }
            if matched == 0 {
                tracing::warn!("no files matched: {}", pattern);
            }
        }
    }
    Ok(files.into_iter().collect())
}

fn sources_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_supported_extension(p))
        .collect())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Derive the output file name from a source path, keeping the extension
/// so `add.c` and `add.h` do not collide.
/// "src/add.c" → "add.c"
fn derive_output_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}
