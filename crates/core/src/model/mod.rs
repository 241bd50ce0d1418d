mod catalog;
mod ids;
mod language;
mod lesson;

pub use catalog::{CatalogError, LessonCatalog};
pub use ids::{LessonId, ParseIdError};
pub use language::{Language, LanguageCatalog, LanguageError};
pub use lesson::{Difficulty, Lesson, LessonError, ParseDifficultyError};
