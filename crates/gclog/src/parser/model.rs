use std::fmt;
use thiserror::Error;
use serde::{Serialize, Deserialize};
use chrono::NaiveDateTime;

use super::timestamp::ABSOLUTE_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CollectorType {
    /// Garbage-First collector
    G1,
    /// Z Garbage Collector (generational)
    #[serde(rename = "ZGC")]
    Zgc,
    /// No collector signature found
    Unknown,
}

impl CollectorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectorType::G1 => "G1",
            CollectorType::Zgc => "ZGC",
            CollectorType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CollectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp recognized at the start of a log line.
///
/// A line carries either a wall-clock time or a JVM uptime, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Timestamp {
    /// `YYYY-MM-DDTHH:MM:SS.mmm`, offset stripped
    Absolute(String),
    /// Seconds since JVM start, always rendered with three decimals
    Relative(String),
}

impl Timestamp {
    pub fn as_absolute(&self) -> Option<&str> {
        match self {
            Timestamp::Absolute(ts) => Some(ts),
            Timestamp::Relative(_) => None,
        }
    }

    /// Calendar value of an absolute timestamp.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        self.as_absolute()
            .and_then(|ts| NaiveDateTime::parse_from_str(ts, ABSOLUTE_FORMAT).ok())
    }

    pub fn relative_seconds(&self) -> Option<f64> {
        match self {
            Timestamp::Relative(secs) => secs.parse().ok(),
            Timestamp::Absolute(_) => None,
        }
    }
}

/// One collection event extracted from a single log line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GcEvent {
    /// Absolute timestamp of the line, empty when the line only had an uptime
    pub timestamp: String,

    /// Milliseconds since the log's first absolute timestamp
    pub app_time: Option<i64>,

    /// Collector-specific label ("Young GC", "Major Collection", ...)
    pub phase: String,

    pub reason: Option<String>,

    /// Pause or cycle duration in milliseconds
    pub duration: Option<f64>,

    /// Heap occupancy before the collection, in KiB
    pub before_size: Option<u64>,

    /// Heap occupancy after the collection, in KiB
    pub after_size: Option<u64>,
}

impl GcEvent {
    /// Memory released by this event in KiB (zero when the heap grew).
    pub fn reclaimed_kb(&self) -> u64 {
        match (self.before_size, self.after_size) {
            (Some(before), Some(after)) => before.saturating_sub(after),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// First absolute timestamp seen in the log
    pub start_time: Option<String>,
    pub collector_type: CollectorType,
    /// Events in source-line order
    pub events: Vec<GcEvent>,
}

impl ParseResult {
    pub fn empty(collector_type: CollectorType) -> Self {
        Self {
            start_time: None,
            collector_type,
            events: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn total_reclaimed_kb(&self) -> u64 {
        self.events.iter().map(GcEvent::reclaimed_kb).sum()
    }
}

/// Fields a collector-specific extractor pulls out of a qualifying line.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub phase: String,
    pub reason: Option<String>,
    pub duration: Option<f64>,
    pub before_size: u64,
    pub after_size: u64,
}

/// Why a timestamped line did not produce an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSkip {
    /// No collector phase marker on the line
    NoPhaseMarker,
    /// Phase marker present but no resolvable heap transition
    NoHeapTransition,
}

impl LineSkip {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSkip::NoPhaseMarker => "no phase marker",
            LineSkip::NoHeapTransition => "no heap transition",
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported GC type: {0}")]
    UnsupportedCollector(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_type_serializes_with_log_names() {
        assert_eq!(serde_json::to_string(&CollectorType::Zgc).unwrap(), "\"ZGC\"");
        assert_eq!(serde_json::to_string(&CollectorType::G1).unwrap(), "\"G1\"");
        assert_eq!(serde_json::to_string(&CollectorType::Unknown).unwrap(), "\"Unknown\"");
        assert_eq!(CollectorType::Zgc.to_string(), "ZGC");
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let event = GcEvent {
            timestamp: "2025-10-24T10:39:41.000".to_string(),
            app_time: Some(0),
            phase: "Young GC".to_string(),
            reason: None,
            duration: Some(15.5),
            before_size: Some(4096),
            after_size: Some(1024),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["appTime"], 0);
        assert_eq!(json["beforeSize"], 4096);
        assert_eq!(json["afterSize"], 1024);
        assert!(json["reason"].is_null());
        assert_eq!(event.reclaimed_kb(), 3072);
    }

    #[test]
    fn test_timestamp_accessors() {
        let abs = Timestamp::Absolute("2025-10-24T10:39:41.250".to_string());
        assert_eq!(abs.as_absolute(), Some("2025-10-24T10:39:41.250"));
        assert!(abs.to_datetime().is_some());
        assert_eq!(abs.relative_seconds(), None);

        let rel = Timestamp::Relative("1.500".to_string());
        assert_eq!(rel.as_absolute(), None);
        assert_eq!(rel.to_datetime(), None);
        assert_eq!(rel.relative_seconds(), Some(1.5));
    }

    #[test]
    fn test_reclaimed_never_negative() {
        let event = GcEvent {
            timestamp: String::new(),
            app_time: None,
            phase: "Full GC".to_string(),
            reason: None,
            duration: None,
            before_size: Some(100),
            after_size: Some(200),
        };
        assert_eq!(event.reclaimed_kb(), 0);
    }
}
