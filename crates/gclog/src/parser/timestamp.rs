//! Timestamp — per-line absolute / relative timestamp recognition.
//!
//! Absolute forms are tried before relative ones. An absolute candidate that
//! is not a real calendar date-time is discarded and the next form is tried.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Timestamp;

/// chrono format of the absolute timestamp we keep (offset stripped).
pub const ABSOLUTE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

const ISO: &str = r"(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3})";
const OFFSET: &str = r"(?:Z|[+-]\d{2}:?\d{2})";

static ABSOLUTE_FORMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // [2025-10-24T10:39:41.000+0800]:
        format!(r"\[{ISO}{OFFSET}\]:?"),
        // [2025-10-24T10:39:41.000]:
        format!(r"\[{ISO}\]:?"),
        // [timestamp: 2025-10-24T10:39:41.000]
        format!(r"(?i)\[timestamp:\s*{ISO}{OFFSET}?\]:?"),
        // 2025-10-24T10:39:41.000+0800: at line start, bare or with colon
        format!(r"^{ISO}{OFFSET}?:?"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("absolute timestamp pattern is valid"))
    .collect()
});

static RELATIVE_FORMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\[(\d+\.\d+)s\]", // [0.123s]
        r"^\[(\d+\.\d+)\]",  // [0.123]
        r"^\[(\d+)\]",       // [123]
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("relative timestamp pattern is valid"))
    .collect()
});

/// Recognize the timestamp carried by one log line.
pub fn recognize(line: &str) -> Option<Timestamp> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }

    recognize_absolute(line).or_else(|| recognize_relative(line))
}

fn recognize_absolute(line: &str) -> Option<Timestamp> {
    ABSOLUTE_FORMS.iter().find_map(|re| {
        let candidate = re.captures(line)?.get(1)?.as_str();
        if is_calendar_valid(candidate) {
            Some(Timestamp::Absolute(candidate.to_string()))
        } else {
            tracing::trace!("Rejected malformed timestamp candidate: {}", candidate);
            None
        }
    })
}

fn recognize_relative(line: &str) -> Option<Timestamp> {
    RELATIVE_FORMS.iter().find_map(|re| {
        let seconds: f64 = re.captures(line)?.get(1)?.as_str().parse().ok()?;
        Some(Timestamp::Relative(format!("{:.3}", seconds)))
    })
}

fn is_calendar_valid(candidate: &str) -> bool {
    NaiveDateTime::parse_from_str(candidate, ABSOLUTE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute(ts: &str) -> Option<Timestamp> {
        Some(Timestamp::Absolute(ts.to_string()))
    }

    fn relative(secs: &str) -> Option<Timestamp> {
        Some(Timestamp::Relative(secs.to_string()))
    }

    #[test]
    fn test_bracketed_with_offset() {
        assert_eq!(
            recognize("[2025-10-24T10:39:41.000+0800][info][gc] Using G1"),
            absolute("2025-10-24T10:39:41.000")
        );
        assert_eq!(
            recognize("[2025-10-24T10:39:41.000-05:00] GC pause"),
            absolute("2025-10-24T10:39:41.000")
        );
        assert_eq!(
            recognize("[2025-10-24T10:39:41.000Z] GC pause"),
            absolute("2025-10-24T10:39:41.000")
        );
    }

    #[test]
    fn test_bracketed_without_offset() {
        assert_eq!(
            recognize("[2023-01-01T12:00:00.456]: GC pause"),
            absolute("2023-01-01T12:00:00.456")
        );
    }

    #[test]
    fn test_explicit_label() {
        assert_eq!(
            recognize("[timestamp: 2023-01-01T12:00:00.456] GC pause"),
            absolute("2023-01-01T12:00:00.456")
        );
        assert_eq!(
            recognize("[Timestamp:2023-01-01T12:00:00.456+0100]: GC pause"),
            absolute("2023-01-01T12:00:00.456")
        );
    }

    #[test]
    fn test_bare_iso_forms() {
        assert_eq!(recognize("2023-01-01T12:00:00.456"), absolute("2023-01-01T12:00:00.456"));
        assert_eq!(
            recognize("2023-01-01T12:00:00.456: Full GC"),
            absolute("2023-01-01T12:00:00.456")
        );
        assert_eq!(
            recognize("  2023-01-01T12:00:00.456+0800: Full GC"),
            absolute("2023-01-01T12:00:00.456")
        );
    }

    #[test]
    fn test_calendar_validation() {
        assert_eq!(recognize("[2025-13-01T10:00:00.000+0800] GC pause"), None);
        assert_eq!(recognize("[2025-10-24T10:61:00.000+0800] GC pause"), None);
        assert_eq!(recognize("[2025-02-30T10:00:00.000] GC pause"), None);
        assert_eq!(recognize("2025-10-24T25:00:00.000 GC pause"), None);
    }

    #[test]
    fn test_relative_forms() {
        assert_eq!(recognize("[0.123s][info][gc] Using G1"), relative("0.123"));
        assert_eq!(recognize("[12.5] GC pause"), relative("12.500"));
        assert_eq!(recognize("[42] GC pause"), relative("42.000"));
        assert_eq!(recognize("[1.23456s] GC pause"), relative("1.235"));
    }

    #[test]
    fn test_absolute_wins_over_relative() {
        let ts = recognize("[2025-10-24T10:39:41.000+0800][0.250s][info][gc] GC pause");
        assert_eq!(ts, absolute("2025-10-24T10:39:41.000"));
    }

    #[test]
    fn test_no_timestamp() {
        assert_eq!(recognize(""), None);
        assert_eq!(recognize("   \t "), None);
        assert_eq!(recognize("GC pause (G1 Young Generation) 10M->5M(20M)"), None);
        assert_eq!(recognize("[info][gc] no time here"), None);
        assert_eq!(recognize("2025-10-24 10:39:41 wrong separator"), None);
    }
}
