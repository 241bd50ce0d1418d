use serde::Serialize;

/// Aggregated view of lesson progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub remaining: usize,
    pub total: usize,
    pub percent: u8,
    pub total_minutes: u32,
}

impl ProgressSummary {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}
