/// GC log parsing and event extraction
///
/// This module turns the raw text of one JVM garbage-collector log into a
/// timeline of collection events.
///
/// # Architecture
///
/// - `traits.rs`: Core traits for collector detectors and event extractors
/// - `detector.rs`: Collector detection over signature substrings
/// - `timestamp.rs`: Absolute / relative timestamp recognition per line
/// - `units.rs`: Heap size and duration normalization
/// - `formats/`: G1 and ZGC event extractors
/// - `scan.rs`: Per-line scan shared by every extractor
/// - `pipeline.rs`: detect → parse → retry entry point
/// - `metrics.rs`: Per-call scan counters
///
/// Lines that cannot be understood are skipped, never fatal. The only hard
/// failure is a log that does not look like GC output at all.

pub mod traits;
pub mod detector;
pub mod timestamp;
pub mod units;
pub mod formats;
pub mod model;
pub mod metrics;
pub mod pipeline;
mod scan;

// Re-export commonly used types
pub use traits::{CollectorDetector, EventExtractor};
pub use model::{CollectorType, GcEvent, ParseError, ParseResult, Timestamp};
pub use detector::{detect_collector, is_g1_log, is_zgc_log};
pub use metrics::ParseStats;
pub use pipeline::{parse, parse_with_stats, CollectorParser, ParsePipeline};
pub use units::{convert_to_kb, format_memory_size, parse_duration_ms};
