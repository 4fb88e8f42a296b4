use serde::Serialize;

use super::model::LineSkip;

/// Counters describing one parse call.
///
/// Owned by the call that produced it; nothing here is shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Non-blank lines examined (retry pass included)
    pub lines_scanned: u64,
    /// Lines without a recognizable timestamp
    pub lines_without_timestamp: u64,
    pub lines_without_phase: u64,
    pub lines_without_transition: u64,
    pub events: u64,
    /// Whether the stricter retry pass ran
    pub retried: bool,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_line(&mut self) {
        self.lines_scanned += 1;
    }

    #[inline]
    pub fn record_missing_timestamp(&mut self) {
        self.lines_without_timestamp += 1;
    }

    #[inline]
    pub fn record_skip(&mut self, skip: LineSkip) {
        match skip {
            LineSkip::NoPhaseMarker => self.lines_without_phase += 1,
            LineSkip::NoHeapTransition => self.lines_without_transition += 1,
        }
    }

    #[inline]
    pub fn record_event(&mut self) {
        self.events += 1;
    }

    /// Fold the counters of a retry pass into this one.
    pub fn merge_retry(&mut self, retry: ParseStats) {
        self.lines_scanned += retry.lines_scanned;
        self.lines_without_timestamp += retry.lines_without_timestamp;
        self.lines_without_phase += retry.lines_without_phase;
        self.lines_without_transition += retry.lines_without_transition;
        // the retry result replaces the empty first pass
        self.events = retry.events;
        self.retried = true;
    }

    pub fn skipped(&self) -> u64 {
        self.lines_without_timestamp + self.lines_without_phase + self.lines_without_transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counters() {
        let mut stats = ParseStats::new();
        stats.record_line();
        stats.record_line();
        stats.record_line();
        stats.record_missing_timestamp();
        stats.record_skip(LineSkip::NoHeapTransition);
        stats.record_event();

        assert_eq!(stats.lines_scanned, 3);
        assert_eq!(stats.lines_without_transition, 1);
        assert_eq!(stats.lines_without_phase, 0);
        assert_eq!(stats.events, 1);
        assert_eq!(stats.skipped(), 2);
        assert!(!stats.retried);
    }

    #[test]
    fn test_merge_retry() {
        let mut first = ParseStats::new();
        first.record_line();
        first.record_skip(LineSkip::NoPhaseMarker);

        let mut retry = ParseStats::new();
        retry.record_line();
        retry.record_event();

        first.merge_retry(retry);
        assert_eq!(first.lines_scanned, 2);
        assert_eq!(first.lines_without_phase, 1);
        assert_eq!(first.events, 1);
        assert!(first.retried);
    }
}
