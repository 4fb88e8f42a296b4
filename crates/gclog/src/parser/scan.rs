//! Scan — the per-line loop shared by every collector parser.
//!
//! timestamp → start time bookkeeping → collector-specific extraction → event.

use chrono::NaiveDateTime;

use super::metrics::ParseStats;
use super::timestamp;
use super::traits::*;

/// Run `extractor` over every line of `content`.
pub fn scan_events<E: EventExtractor + ?Sized>(extractor: &E, content: &str) -> (ParseResult, ParseStats) {
    let mut stats = ParseStats::new();
    let mut events = Vec::new();
    let mut start: Option<(String, NaiveDateTime)> = None;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        stats.record_line();

        let Some(ts) = timestamp::recognize(line) else {
            stats.record_missing_timestamp();
            continue;
        };

        let at = ts.to_datetime();
        if start.is_none() {
            if let (Some(raw), Some(at)) = (ts.as_absolute(), at) {
                start = Some((raw.to_string(), at));
            }
        }

        let fields = match extractor.extract(line) {
            Ok(fields) => fields,
            Err(skip) => {
                tracing::trace!("Skipping line ({}): {}", skip.as_str(), line);
                stats.record_skip(skip);
                continue;
            }
        };

        let app_time = match (at, start.as_ref()) {
            (Some(at), Some((_, origin))) => Some((at - *origin).num_milliseconds()),
            _ => None,
        };

        stats.record_event();
        events.push(GcEvent {
            timestamp: ts.as_absolute().unwrap_or_default().to_string(),
            app_time,
            phase: fields.phase,
            reason: fields.reason,
            duration: fields.duration,
            before_size: Some(fields.before_size),
            after_size: Some(fields.after_size),
        });
    }

    let result = ParseResult {
        start_time: start.map(|(raw, _)| raw),
        collector_type: extractor.collector(),
        events,
    };

    (result, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts any line containing "EVENT" with fixed sizes.
    struct StubExtractor;

    impl EventExtractor for StubExtractor {
        fn extract(&self, line: &str) -> Result<EventFields, LineSkip> {
            if !line.contains("EVENT") {
                return Err(LineSkip::NoPhaseMarker);
            }
            Ok(EventFields {
                phase: "Stub".to_string(),
                reason: None,
                duration: None,
                before_size: 10,
                after_size: 5,
            })
        }

        fn collector(&self) -> CollectorType {
            CollectorType::Unknown
        }
    }

    #[test]
    fn test_start_time_from_first_absolute_line() {
        let log = "[0.100s] EVENT\n\
                   [2025-01-01T00:00:01.000+0000] booting\n\
                   [2025-01-01T00:00:02.500+0000] EVENT\n";
        let (result, stats) = scan_events(&StubExtractor, log);

        assert_eq!(result.start_time.as_deref(), Some("2025-01-01T00:00:01.000"));
        assert_eq!(result.events.len(), 2);
        // relative-only event has no wall-clock position
        assert_eq!(result.events[0].timestamp, "");
        assert_eq!(result.events[0].app_time, None);
        assert_eq!(result.events[1].app_time, Some(1500));
        assert_eq!(stats.lines_without_phase, 1);
    }

    #[test]
    fn test_lines_without_timestamp_are_skipped() {
        let log = "EVENT without time\r\n\r\n[1.000s] EVENT\r\n";
        let (result, stats) = scan_events(&StubExtractor, log);

        assert_eq!(result.events.len(), 1);
        assert_eq!(result.start_time, None);
        assert_eq!(stats.lines_scanned, 2);
        assert_eq!(stats.lines_without_timestamp, 1);
    }

    #[test]
    fn test_first_event_app_time_is_zero() {
        let log = "[2025-01-01T00:00:00.000] EVENT";
        let (result, _) = scan_events(&StubExtractor, log);
        assert_eq!(result.events[0].app_time, Some(0));
        assert_eq!(result.events[0].before_size, Some(10));
    }
}
