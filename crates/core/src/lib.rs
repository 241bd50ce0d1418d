#![forbid(unsafe_code)]

pub mod model;
pub mod progress;
pub mod time;

pub use progress::{CompletionSet, ProgressTracker};
pub use time::Clock;
