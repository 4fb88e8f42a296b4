use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::traits::*;
use crate::parser::units::{convert_to_kb, parse_duration_ms};

static PHASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Major|Minor)\s+Collection").expect("phase pattern is valid")
});

/// `GC(3) Major Collection (Warmup) 100M(20%)->50M(10%) 0.035s`
///
/// Groups: 1 kind, 2 reason, 3/4 before, 5/6 after, 7 duration token.
/// The reason is matched lazily so `(System.gc())` keeps its inner parens.
static COLLECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:GC\(\d+\)\s+)?(Major|Minor)\s+Collection(?:\s+\((.*?)\))?\s+(\d+)([KMGkmg])\s*\(\d+(?:\.\d+)?%\)\s*->\s*(\d+)([KMGkmg])\s*\(\d+(?:\.\d+)?%\)(?:\s+(\d+(?:\.\d+)?\s*(?:ms|s))\b)?",
    )
    .expect("collection pattern is valid")
});

/// ZGC event extractor (generational ZGC, JDK 21+)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZgcParser;

impl EventExtractor for ZgcParser {
    fn extract(&self, line: &str) -> Result<EventFields, LineSkip> {
        if !PHASE.is_match(line) {
            return Err(LineSkip::NoPhaseMarker);
        }

        let caps = COLLECTION.captures(line).ok_or(LineSkip::NoHeapTransition)?;
        let before: u64 = caps[3].parse().map_err(|_| LineSkip::NoHeapTransition)?;
        let after: u64 = caps[5].parse().map_err(|_| LineSkip::NoHeapTransition)?;

        let reason = caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|reason| !reason.is_empty());

        Ok(EventFields {
            phase: format!("{} Collection", &caps[1]),
            reason,
            duration: caps.get(7).and_then(|m| parse_duration_ms(m.as_str())),
            before_size: convert_to_kb(before, &caps[4]),
            after_size: convert_to_kb(after, &caps[6]),
        })
    }

    fn collector(&self) -> CollectorType {
        CollectorType::Zgc
    }
}
