use boarder_core::CompletionSet;
use boarder_core::model::{Lesson, LessonCatalog, LessonId};

use crate::vm::time_fmt::format_minutes;

/// UI-ready representation of a lesson card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: String,
    pub duration_label: String,
    pub completed: bool,
}

impl LessonCardVm {
    #[must_use]
    pub fn new(lesson: &Lesson, completed: bool) -> Self {
        let difficulty = lesson.difficulty();
        Self {
            id: lesson.id(),
            title: lesson.title().to_owned(),
            description: lesson.description().to_owned(),
            difficulty_label: difficulty.label(),
            difficulty_class: format!("difficulty {}", difficulty.slug()),
            duration_label: format!("⏱️ {}", format_minutes(lesson.duration_minutes())),
            completed,
        }
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.completed {
            "lesson-card completed"
        } else {
            "lesson-card"
        }
    }

    #[must_use]
    pub fn button_class(&self) -> &'static str {
        if self.completed {
            "lesson-button completed"
        } else {
            "lesson-button"
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.completed {
            "✅ Completed"
        } else {
            "▶️ Start Lesson"
        }
    }
}

/// One card per catalog lesson, in catalog order.
#[must_use]
pub fn map_lesson_cards(catalog: &LessonCatalog, completed: &CompletionSet) -> Vec<LessonCardVm> {
    catalog
        .lessons()
        .iter()
        .map(|lesson| LessonCardVm::new(lesson, completed.contains(lesson.id())))
        .collect()
}
