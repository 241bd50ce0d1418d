mod progress;
mod service;

pub use progress::ProgressSummary;
pub use service::TutorialService;
