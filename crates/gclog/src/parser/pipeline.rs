//! Pipeline — detect the collector, run its parser, retry once on an empty result.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::detector::CollectorDetectorOrchestrator;
use super::formats::{G1Parser, ZgcParser};
use super::metrics::ParseStats;
use super::scan::scan_events;
use super::traits::*;

/// Standalone `used=<n><unit>` token of the old heap-snapshot format.
static HEAP_SNAPSHOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bused=\d+[KMGkmg]\b").expect("heap snapshot pattern is valid")
});

static SIZE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+[KMG]").expect("size token pattern is valid")
});

/// The collector parsers this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorParser {
    G1(G1Parser),
    Zgc(ZgcParser),
}

impl CollectorParser {
    /// Parser for a detected collector; `None` for [`CollectorType::Unknown`].
    pub fn for_collector(collector: CollectorType) -> Option<Self> {
        match collector {
            CollectorType::G1 => Some(CollectorParser::G1(G1Parser)),
            CollectorType::Zgc => Some(CollectorParser::Zgc(ZgcParser)),
            CollectorType::Unknown => None,
        }
    }

    pub fn parse(&self, content: &str) -> (ParseResult, ParseStats) {
        match self {
            CollectorParser::G1(parser) => scan_events(parser, content),
            CollectorParser::Zgc(parser) => scan_events(parser, content),
        }
    }

    pub fn collector(&self) -> CollectorType {
        match self {
            CollectorParser::G1(parser) => parser.collector(),
            CollectorParser::Zgc(parser) => parser.collector(),
        }
    }
}

/// Entry point: collector detection, parsing and the empty-result retry.
pub struct ParsePipeline {
    detector: CollectorDetectorOrchestrator,
}

impl ParsePipeline {
    pub fn new() -> Self {
        Self {
            detector: CollectorDetectorOrchestrator::new(),
        }
    }

    pub fn parse(&self, content: &str) -> Result<ParseResult, ParseError> {
        self.parse_with_stats(content).map(|(result, _)| result)
    }

    pub fn parse_with_stats(&self, content: &str) -> Result<(ParseResult, ParseStats), ParseError> {
        if HEAP_SNAPSHOT.is_match(content) {
            debug!("Heap snapshot content, skipping collector parsers");
            return Ok((ParseResult::empty(CollectorType::Unknown), ParseStats::new()));
        }

        let lines: Vec<&str> = content.lines().collect();
        let detected = self.detector.detect(&lines);
        debug!("Detected GC type: {}", detected);

        let parser = match CollectorParser::for_collector(detected) {
            Some(parser) => parser,
            None if looks_like_gc_output(&lines) => {
                debug!("No collector signature, falling back to G1 rules");
                CollectorParser::G1(G1Parser)
            }
            // blank input has no GC tokens either, so it fails here as well
            None => {
                return Err(ParseError::UnsupportedCollector(
                    "no G1 or ZGC signature found in log".to_string(),
                ));
            }
        };

        let (mut result, mut stats) = parser.parse(content);

        if result.is_empty() {
            let candidates: Vec<&str> = lines
                .iter()
                .copied()
                .filter(|line| is_retry_candidate(line))
                .collect();
            info!(
                "No {} events found, retrying over {} candidate lines",
                parser.collector(),
                candidates.len()
            );

            let (retry_result, retry_stats) = parser.parse(&candidates.join("\n"));
            result = retry_result;
            stats.merge_retry(retry_stats);
        }

        // best-effort parses keep reporting what detection actually found
        result.collector_type = detected;

        debug!(
            "Parsed {} events ({} lines scanned, {} skipped)",
            result.events.len(),
            stats.lines_scanned,
            stats.skipped()
        );

        Ok((result, stats))
    }
}

impl Default for ParsePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one GC log into a timeline of collection events.
pub fn parse(content: &str) -> Result<ParseResult, ParseError> {
    ParsePipeline::new().parse(content)
}

/// [`parse`], also returning the scan counters.
pub fn parse_with_stats(content: &str) -> Result<(ParseResult, ParseStats), ParseError> {
    ParsePipeline::new().parse_with_stats(content)
}

fn looks_like_gc_output(lines: &[&str]) -> bool {
    lines.iter().any(|line| line.contains("GC pause") || line.contains("Collection"))
}

fn is_retry_candidate(line: &str) -> bool {
    SIZE_TOKEN.is_match(line) && (line.contains("Collection") || line.contains("GC pause"))
}
