pub use super::model::{
    CollectorType, EventFields, GcEvent, LineSkip, ParseResult, ParseError, Timestamp
};

pub trait CollectorDetector: Send + Sync {
    /// does this line carry one of the collector's signatures
    fn matches(&self, line: &str) -> bool;
    fn collector(&self) -> CollectorType;
}

pub trait EventExtractor: Send + Sync {
    /// pull event fields out of one timestamped line
    fn extract(&self, line: &str) -> Result<EventFields, LineSkip>;
    fn collector(&self) -> CollectorType;
}
