//! Carver - signature-based file carving from disk images.

mod bar_progress;
mod cli;
mod file_sink;
mod logging;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use humansize::{format_size, BINARY};

use carver_core::extractors::ExtractConfig;
use carver_core::{CarveConfig, CarveCoordinator, Filter, RandomReader, StandardFilter, SystemClock};

use bar_progress::BarProgress;
use cli::Args;
use file_sink::FileSink;

fn main() -> Result<()> {
    let args = Args::parse();

    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let run_dir = PathBuf::from(&args.output).join(format!("recovery_output_{timestamp}"));
    let carved_dir = run_dir.join("carved_files");
    std::fs::create_dir_all(&carved_dir)
        .with_context(|| format!("failed to create {}", carved_dir.display()))?;

    logging::init(&run_dir.join("recovery.log"), args.verbose)?;

    let running = Arc::new(AtomicBool::new(true));
    let running_for_handler = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let mut reader = carver_io::Reader::new(&args.source)
        .with_context(|| format!("failed to open {}", args.source))?;
    let source_size = reader.size();

    println!("[carver] source: {}", args.source);
    println!("[carver] size: {}", format_size(source_size, BINARY));
    println!("[carver] output: {}", run_dir.display());

    let filter: Box<dyn Filter> = if args.ext.is_empty() && args.name_contains.is_none() && args.max_size.is_none()
    {
        Box::new(carver_core::AcceptAll)
    } else {
        Box::new(StandardFilter {
            extensions: if args.ext.is_empty() {
                None
            } else {
                Some(args.ext.iter().map(|e| e.to_ascii_lowercase()).collect())
            },
            name_substring: args.name_contains.clone(),
            max_size: args.max_size,
        })
    };

    let mut sink = FileSink::new(&carved_dir)
        .with_context(|| format!("failed to prepare {}", carved_dir.display()))?;
    let mut progress = BarProgress::new(source_size);
    let clock = SystemClock;

    let config = CarveConfig {
        chunk_size: args.chunk_size.saturating_mul(1024 * 1024),
        start_offset: args.start_offset,
        extract: ExtractConfig::default(),
    };

    let mut coordinator = CarveCoordinator::new(
        &mut reader as &mut dyn RandomReader,
        filter.as_ref(),
        &mut sink,
        &mut progress,
        &clock,
        config,
    );

    let is_cancelled = || !running.load(Ordering::SeqCst);
    let outcome = coordinator.run(&is_cancelled)?;
    progress.finish();

    if outcome.cancelled {
        println!("[carver] cancelled after recovering {} item(s)", outcome.stats.recovered_count);
    } else {
        println!("[carver] finished: {} item(s) recovered", outcome.stats.recovered_count);
    }
    println!(
        "[carver] transient read errors: {}, malformed containers: {}, rejected by filter: {}",
        outcome.stats.transient_read_errors,
        outcome.stats.malformed_containers,
        outcome.stats.rejected_by_filter,
    );

    Ok(())
}
