// Module structure for gclog: GC log → collection event timeline.

// Core
pub mod parser;

// Binary support
pub mod conf;
pub mod runtime;

pub use parser::{
    detect_collector, parse, parse_with_stats, CollectorType, GcEvent, ParseError, ParseResult,
    ParseStats, Timestamp,
};
