use services::ProgressSummary;

use crate::vm::time_fmt::format_minutes;

/// UI-ready progress numbers for the progress section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    pub percent_label: String,
    pub fill_style: String,
    pub completed_label: String,
    pub completed: usize,
    pub remaining: usize,
    pub total_time_label: String,
}

impl From<&ProgressSummary> for ProgressVm {
    fn from(summary: &ProgressSummary) -> Self {
        Self {
            percent: summary.percent,
            percent_label: format!("{}%", summary.percent),
            fill_style: format!("width: {}%;", summary.percent),
            completed_label: format!(
                "{} of {} lessons completed",
                summary.completed, summary.total
            ),
            completed: summary.completed,
            remaining: summary.remaining,
            total_time_label: format_minutes(summary.total_minutes),
        }
    }
}
