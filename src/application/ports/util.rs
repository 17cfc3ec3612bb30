// src/application/ports/util.rs
/// Normalizes arbitrary text into a URL-safe slug. Implementations must be
/// deterministic for a given input.
pub trait SegmentFilter: Send + Sync {
    fn filter(&self, input: &str) -> String;
}
