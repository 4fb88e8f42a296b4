use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::traits::*;
use crate::parser::units::{convert_to_kb, parse_duration_ms};

static HEAP_TRANSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)([KMG])->(\d+)([KMG])").expect("heap transition pattern is valid")
});

/// `15.3ms`, `0.0123 s` and the classic `0.0123 secs`; group 1 is the bare token.
static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?\s?(?:ms|s))(?:ecs?)?\b").expect("duration pattern is valid")
});

/// First parenthesized group, one level of nesting allowed: `(System.gc())`
static FIRST_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(((?:[^()]|\([^()]*\))*)\)").expect("group pattern is valid")
});

/// G1 event extractor
///
/// Handles both the legacy `GC pause (G1 Young Generation)` phrasing and the
/// unified-logging `Pause Young (Normal)` markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct G1Parser;

impl G1Parser {
    fn phase(line: &str) -> Option<&'static str> {
        if line.contains("Mixed Generation")
            || line.contains("Pause Young (Mixed)")
            || line.contains("Pause Mixed")
        {
            Some("Mixed GC")
        } else if line.contains("Young Generation") || line.contains("Pause Young") {
            Some("Young GC")
        } else if line.contains("Full GC") || line.contains("Pause Full") {
            Some("Full GC")
        } else {
            None
        }
    }

    /// First parenthesized text ahead of the heap figures, skipping `GC(<n>)`
    /// sequence markers; the `(8192M)` capacity annotation is never a reason.
    fn reason(head: &str) -> Option<String> {
        FIRST_GROUP
            .captures_iter(head)
            .map(|caps| caps[1].trim().to_string())
            .find(|group| !group.chars().all(|c| c.is_ascii_digit()))
    }
}

impl EventExtractor for G1Parser {
    fn extract(&self, line: &str) -> Result<EventFields, LineSkip> {
        let phase = Self::phase(line).ok_or(LineSkip::NoPhaseMarker)?;

        let caps = HEAP_TRANSITION.captures(line).ok_or(LineSkip::NoHeapTransition)?;
        let before: u64 = caps[1].parse().map_err(|_| LineSkip::NoHeapTransition)?;
        let after: u64 = caps[3].parse().map_err(|_| LineSkip::NoHeapTransition)?;

        let (head_end, tail_start) = caps
            .get(0)
            .map(|m| (m.start(), m.end()))
            .unwrap_or((line.len(), line.len()));

        // only look past the transition so "[0.123s]" prefixes never read as a pause time
        let duration = DURATION
            .captures(&line[tail_start..])
            .and_then(|c| c.get(1))
            .and_then(|m| parse_duration_ms(m.as_str()));

        Ok(EventFields {
            phase: phase.to_string(),
            reason: Self::reason(&line[..head_end]),
            duration,
            before_size: convert_to_kb(before, &caps[2]),
            after_size: convert_to_kb(after, &caps[4]),
        })
    }

    fn collector(&self) -> CollectorType {
        CollectorType::G1
    }
}
