//! Units — heap size and duration normalization.

use once_cell::sync::Lazy;
use regex::Regex;

const KB_PER_MB: u64 = 1024;
const KB_PER_GB: u64 = 1024 * 1024;

static DURATION_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*(ms|s)\s*$").expect("duration pattern is valid")
});

/// Convert a `<magnitude><unit>` heap figure to KiB.
///
/// Units are matched case-insensitively; anything other than K/M/G is taken
/// as KiB already.
pub fn convert_to_kb(magnitude: u64, unit: &str) -> u64 {
    match unit.to_ascii_uppercase().as_str() {
        "M" => magnitude.saturating_mul(KB_PER_MB),
        "G" => magnitude.saturating_mul(KB_PER_GB),
        _ => magnitude,
    }
}

/// Parse `"<float> s"` / `"<float> ms"` into milliseconds.
pub fn parse_duration_ms(token: &str) -> Option<f64> {
    let caps = DURATION_TOKEN.captures(token)?;
    let value: f64 = caps[1].parse().ok()?;

    match &caps[2] {
        // keep microsecond precision without float noise (0.035s -> 35.0)
        "s" => Some((value * 1_000_000.0).round() / 1000.0),
        _ => Some(value),
    }
}

/// Human-readable heap size for summaries.
pub fn format_memory_size(kb: u64) -> String {
    if kb >= KB_PER_GB {
        format!("{:.2} GB", kb as f64 / KB_PER_GB as f64)
    } else if kb >= KB_PER_MB {
        format!("{:.2} MB", kb as f64 / KB_PER_MB as f64)
    } else {
        format!("{} KB", kb)
    }
}
