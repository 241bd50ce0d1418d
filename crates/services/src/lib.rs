#![forbid(unsafe_code)]

pub mod error;
pub mod tutorial;

pub use boarder_core::Clock;

pub use error::TutorialError;
pub use tutorial::{ProgressSummary, TutorialService};
