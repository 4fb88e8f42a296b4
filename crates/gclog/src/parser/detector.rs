use super::traits::*;

/// ZGC signature detector
pub struct ZgcDetector;

impl CollectorDetector for ZgcDetector {
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains("using zgc")
            || (line.contains("gc,init") && line.contains("ZGC"))
            || line.contains("The Z Garbage Collector")
            || line.contains("Major Collection")
            || line.contains("Minor Collection")
    }

    fn collector(&self) -> CollectorType {
        CollectorType::Zgc
    }
}

/// G1 signature detector
pub struct G1Detector;

impl CollectorDetector for G1Detector {
    fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains("using g1")
            || line.contains("G1 Young Generation")
            || line.contains("G1 Mixed Generation")
            || line.contains("GC pause (G1")
    }

    fn collector(&self) -> CollectorType {
        CollectorType::G1
    }
}

/// Collector detector orchestrator
///
/// Each detector scans the whole log before the next one is consulted, so a
/// ZGC signature anywhere wins over G1 signatures on earlier lines.
pub struct CollectorDetectorOrchestrator {
    detectors: Vec<Box<dyn CollectorDetector>>,
}

impl CollectorDetectorOrchestrator {
    pub fn new() -> Self {
        let detectors: Vec<Box<dyn CollectorDetector>> = vec![
            // Order matters! ZGC logs can mention G1-looking text, not vice versa
            Box::new(ZgcDetector),
            Box::new(G1Detector),
        ];

        Self { detectors }
    }

    pub fn detect(&self, lines: &[&str]) -> CollectorType {
        self.detectors
            .iter()
            .find(|detector| lines.iter().any(|line| detector.matches(line)))
            .map(|detector| detector.collector())
            .unwrap_or(CollectorType::Unknown)
    }
}

impl Default for CollectorDetectorOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a whole log as ZGC, G1 or Unknown.
pub fn detect_collector(lines: &[&str]) -> CollectorType {
    CollectorDetectorOrchestrator::new().detect(lines)
}

/// True if any line carries a ZGC signature.
pub fn is_zgc_log(lines: &[&str]) -> bool {
    lines.iter().any(|line| ZgcDetector.matches(line))
}

/// True if any line carries a G1 signature.
pub fn is_g1_log(lines: &[&str]) -> bool {
    lines.iter().any(|line| G1Detector.matches(line))
}
