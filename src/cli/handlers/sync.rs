//! Sync command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::SyncArgs;
use crate::cli::config::Config;
use crate::cli::output::OutputFormat;
use crate::sync::{PassReport, SyncScheduler, run_pass};

pub fn handle_sync(args: &SyncArgs, db_path: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(db_path)?;
    let options = config.sync_options();

    if !args.watch {
        let report = run_pass(&mut store, &options);
        print_report(1, &report, args.format)?;
        if !report.succeeded() {
            bail!("category sync rolled back; previous edges were kept");
        }
        return Ok(());
    }

    let mut scheduler =
        SyncScheduler::new(config.sync_interval(args.interval)).with_options(options);
    if let Some(ticks) = args.ticks {
        scheduler = scheduler.with_max_ticks(ticks);
    }

    let format = args.format;
    let handle = scheduler
        .spawn(store, move |tick, report| {
            if let Err(err) = print_report(tick, report, format) {
                tracing::error!(error = %err, "failed to print sync report");
            }
        })
        .context("failed to start sync thread")?;

    handle.wait().context("sync thread panicked")?;
    Ok(())
}

/// Human-readable summary of one pass, one line per edge kind.
pub(crate) fn report_lines(tick: usize, report: &PassReport) -> Vec<String> {
    let mut lines = vec![format!("Pass {}:", tick)];
    for kind in &report.kinds {
        match &kind.error {
            Some(err) => lines.push(format!("  {}: rolled back ({})", kind.kind, err)),
            None => lines.push(format!(
                "  {}: {} scanned, {} rewritten, {} edges",
                kind.kind, kind.owners_scanned, kind.owners_rewritten, kind.edges_written
            )),
        }
        if !kind.unresolved.is_empty() {
            lines.push(format!("    unresolved: {}", kind.unresolved.join(", ")));
        }
    }
    lines
}

fn print_report(tick: usize, report: &PassReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Human | OutputFormat::Titles => {
            for line in report_lines(tick, report) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
