//! Run — read one log file, parse it, write the result as JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::conf::AnalyzerConfig;
use crate::parser::{format_memory_size, ParsePipeline, ParseResult, ParseStats};

/// `--stats` output shape.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub result: &'a ParseResult,
    pub stats: &'a ParseStats,
}

/// Read, parse and write a single GC log.
pub fn run<W: Write>(
    path: &Path,
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = fs::metadata(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?
        .len();
    if size > config.max_input_bytes {
        return Err(format!(
            "{} is {} bytes, larger than max_input_bytes ({})",
            path.display(),
            size,
            config.max_input_bytes
        )
        .into());
    }

    let bytes = fs::read(path).map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let content = String::from_utf8_lossy(&bytes);

    let (result, stats) = ParsePipeline::new().parse_with_stats(&content)?;
    summarize(path, &result, &stats);

    write_output(&result, &stats, config, out)
}

pub fn write_output<W: Write>(
    result: &ParseResult,
    stats: &ParseStats,
    config: &AnalyzerConfig,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.include_stats {
        write_json(&Report { result, stats }, config.pretty, out)?;
    } else {
        write_json(result, config.pretty, out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_json<T: Serialize, W: Write>(value: &T, pretty: bool, out: &mut W) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(out, value)
    } else {
        serde_json::to_writer(out, value)
    }
}

fn summarize(path: &Path, result: &ParseResult, stats: &ParseStats) {
    if result.is_empty() {
        warn!("{}: no {} collection events found", path.display(), result.collector_type);
        return;
    }

    info!(
        "{}: {} {} events, {} reclaimed, {} of {} lines skipped",
        path.display(),
        result.events.len(),
        result.collector_type,
        format_memory_size(result.total_reclaimed_kb()),
        stats.skipped(),
        stats.lines_scanned
    );
}
