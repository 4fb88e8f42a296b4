/// Collector-specific event extractors

pub mod g1;
pub mod zgc;

// Re-export extractor implementations
pub use g1::G1Parser;
pub use zgc::ZgcParser;
