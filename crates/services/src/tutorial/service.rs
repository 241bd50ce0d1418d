use boarder_core::model::{Language, LanguageCatalog, LessonCatalog, LessonId};
use boarder_core::{Clock, CompletionSet, ProgressTracker};
use tracing::{debug, info, warn};

use crate::error::TutorialError;

use super::progress::ProgressSummary;

/// Read-only lesson/language catalogs plus the completion transitions the UI
/// needs. Holds no session state itself; callers pass `CompletionSet` in and
/// keep the one handed back.
#[derive(Debug, Clone)]
pub struct TutorialService {
    clock: Clock,
    lessons: LessonCatalog,
    languages: LanguageCatalog,
}

impl TutorialService {
    #[must_use]
    pub fn new(clock: Clock, lessons: LessonCatalog, languages: LanguageCatalog) -> Self {
        Self {
            clock,
            lessons,
            languages,
        }
    }

    /// Service over the built-in six-lesson catalog and language list.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError` if a built-in table fails validation.
    pub fn builtin(clock: Clock) -> Result<Self, TutorialError> {
        Ok(Self::new(
            clock,
            LessonCatalog::builtin()?,
            LanguageCatalog::builtin()?,
        ))
    }

    #[must_use]
    pub fn catalog(&self) -> &LessonCatalog {
        &self.lessons
    }

    #[must_use]
    pub fn languages(&self) -> &LanguageCatalog {
        &self.languages
    }

    fn tracker(&self) -> ProgressTracker<'_> {
        ProgressTracker::new(&self.lessons)
    }

    #[must_use]
    pub fn mark_complete(&self, state: CompletionSet, lesson_id: LessonId) -> CompletionSet {
        if !self.lessons.contains(lesson_id) {
            warn!(%lesson_id, "ignoring completion for unknown lesson");
            return state;
        }
        let already = state.contains(lesson_id);
        let next = self.tracker().mark_complete(state, lesson_id);
        if !already {
            debug!(%lesson_id, completed = next.len(), "lesson completed");
        }
        next
    }

    #[must_use]
    pub fn reset(&self, state: CompletionSet) -> CompletionSet {
        info!(cleared = state.len(), "progress reset");
        self.tracker().reset(state)
    }

    #[must_use]
    pub fn progress_percent(&self, state: &CompletionSet) -> u8 {
        self.tracker().progress_percent(state)
    }

    #[must_use]
    pub fn summary(&self, state: &CompletionSet) -> ProgressSummary {
        let tracker = self.tracker();
        ProgressSummary {
            completed: state.len(),
            remaining: tracker.remaining(state),
            total: self.lessons.len(),
            percent: tracker.progress_percent(state),
            total_minutes: self.lessons.total_minutes(),
        }
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.lessons.total_minutes()
    }

    #[must_use]
    pub fn default_language(&self) -> &Language {
        self.languages.default_language()
    }

    /// Resolves a language code from the selector.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::UnknownLanguage` if the code is not offered.
    pub fn select_language(&self, code: &str) -> Result<&Language, TutorialError> {
        let language = self
            .languages
            .find(code)
            .ok_or_else(|| TutorialError::UnknownLanguage(code.to_owned()))?;
        debug!(code = language.code(), "language selected");
        Ok(language)
    }

    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.clock.year()
    }
}
