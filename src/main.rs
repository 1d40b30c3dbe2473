//! briefly is a CLI tool that summarizes web articles and PDF documents.
//!
//! The tool has two commands:
//! 1. `web` - Fetch one or more web pages and print an extractive summary of each
//! 2. `pdf` - Read one or more local PDF files and print an extractive summary of each
//!
//! The CLI is a thin adapter: it dispatches source descriptors into the
//! pipeline, prints the summary or the terminal failure message, and keeps
//! the session title log.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, warn};

use briefly::pipeline::{self, PipelineContext, TitleLog};
use briefly::summarize::TopNFrequencyRanker;
use briefly::{ContentStrategy, SourceDescriptor};

/// A CLI tool to summarize web articles and PDF documents
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute (web or pdf)
    #[command(subcommand)]
    command: Command,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch web pages and print an extractive summary of each
    Web {
        /// The page URLs to summarize
        #[arg(required = true)]
        urls: Vec<String>,
        /// Content-selection strategy: "article" (default) or "paragraphs"
        #[arg(long, short, default_value = "article")]
        strategy: ContentStrategy,
    },
    /// Read local PDF files and print an extractive summary of each
    Pdf {
        /// The PDF file paths to summarize
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .try_init()
        .context("Unable to initialize logging")?;

    let (descriptors, strategy) = match cli.command {
        Command::Web { urls, strategy } => (
            urls.into_iter().map(SourceDescriptor::Url).collect::<Vec<_>>(),
            strategy,
        ),
        Command::Pdf { paths } => (
            paths
                .into_iter()
                .map(SourceDescriptor::FilePath)
                .collect::<Vec<_>>(),
            ContentStrategy::default(),
        ),
    };

    let ranker = TopNFrequencyRanker::default();
    let ctx = PipelineContext {
        strategy,
        ranker: &ranker,
    };
    let mut title_log = TitleLog::default();

    for descriptor in &descriptors {
        match pipeline::run(descriptor, &ctx) {
            Ok(output) => {
                println!("# {}", output.title.as_deref().unwrap_or(&output.source));
                println!("{}\n", output.summary);
                title_log.append(output.source);
            }
            Err(run_error) => {
                warn!("{}: {run_error}", descriptor.source_id());
                println!("{}\n", run_error.user_message());
            }
        }
    }

    if !title_log.is_empty() {
        println!("Processed:");
        for entry in title_log.entries() {
            println!("- {entry}");
        }
    }

    Ok(())
}
