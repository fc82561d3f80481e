//! sdb shell binary.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sdb::repl::Repl;
use sdb::{Dispatcher, PAGE_SIZE, TABLE_MAX_PAGES, Table, TableConfig};
use tracing_subscriber::EnvFilter;

/// An in-memory paged row store with an interactive shell
#[derive(Parser, Debug)]
#[command(name = "sdb", version, about)]
struct Args {
    /// Page size in bytes
    #[arg(long, default_value_t = PAGE_SIZE)]
    page_size: usize,

    /// Maximum number of pages the table may allocate
    #[arg(long, default_value_t = TABLE_MAX_PAGES)]
    max_pages: usize,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sdb=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // stdout carries the shell protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = TableConfig::builder()
        .page_size(args.page_size)
        .max_pages(args.max_pages)
        .build()
        .context("invalid table configuration")?;
    tracing::debug!(
        rows_per_page = config.rows_per_page(),
        max_rows = config.max_rows(),
        "table configured"
    );

    let dispatcher = Dispatcher::new(Table::new(config));
    Repl::new(io::stdin().lock(), io::stdout().lock(), dispatcher).run()?;
    Ok(())
}
