mod language_vm;
mod lesson_vm;
mod progress_vm;
mod time_fmt;

pub use language_vm::{LanguageOptionVm, current_language_label, map_language_options};
pub use lesson_vm::{LessonCardVm, map_lesson_cards};
pub use progress_vm::ProgressVm;
pub use time_fmt::format_minutes;
