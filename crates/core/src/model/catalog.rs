use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::LessonId;
use crate::model::lesson::{Difficulty, Lesson, LessonError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("lesson catalog cannot be empty")]
    Empty,

    #[error("duplicate lesson id {0}")]
    DuplicateId(LessonId),

    #[error(transparent)]
    Lesson(#[from] LessonError),
}

/// Fixed, ordered list of lessons.
///
/// Ids are unique and the catalog is never empty, so ratios over
/// `len()` are always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Builds a catalog from lessons in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for no lessons and
    /// `CatalogError::DuplicateId` if two lessons share an id.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, CatalogError> {
        if lessons.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(lessons.len());
        for lesson in &lessons {
            if !seen.insert(lesson.id()) {
                return Err(CatalogError::DuplicateId(lesson.id()));
            }
        }

        Ok(Self { lessons })
    }

    /// The six built-in smartphone lessons.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table itself is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        const BUILTIN: [(u64, &str, &str, Difficulty, u32); 6] = [
            (
                1,
                "📞 Making Calls",
                "Learn how to make and receive calls confidently",
                Difficulty::Beginner,
                5,
            ),
            (
                2,
                "💬 Text Messaging",
                "Master sending and receiving SMS messages",
                Difficulty::Beginner,
                7,
            ),
            (
                3,
                "👥 Managing Contacts",
                "Save, organize and manage your contacts",
                Difficulty::Beginner,
                6,
            ),
            (
                4,
                "📸 Camera & Photos",
                "Take stunning photos and manage your gallery",
                Difficulty::Intermediate,
                10,
            ),
            (
                5,
                "⚙️ Phone Settings",
                "Customize your phone settings with ease",
                Difficulty::Intermediate,
                8,
            ),
            (
                6,
                "🌐 Internet Browsing",
                "Navigate the web safely and efficiently",
                Difficulty::Intermediate,
                12,
            ),
        ];

        let lessons = BUILTIN
            .into_iter()
            .map(|(id, title, desc, difficulty, minutes)| {
                Lesson::new(LessonId::new(id), title, desc, difficulty, minutes)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(lessons)
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: LessonId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.lessons.iter().map(Lesson::id)
    }

    /// Sum of all lesson durations, independent of completion.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.lessons.iter().map(Lesson::duration_minutes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: u64, minutes: u32) -> Lesson {
        Lesson::new(LessonId::new(id), format!("L{id}"), "", Difficulty::Beginner, minutes)
            .unwrap()
    }

    #[test]
    fn builtin_catalog_has_six_ordered_lessons() {
        let catalog = LessonCatalog::builtin().unwrap();
        let ids: Vec<u64> = catalog.ids().map(|id| id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.lessons()[3].title(), "📸 Camera & Photos");
        assert_eq!(
            catalog.get(LessonId::new(6)).map(Lesson::difficulty),
            Some(Difficulty::Intermediate)
        );
    }

    #[test]
    fn builtin_catalog_totals_48_minutes() {
        let catalog = LessonCatalog::builtin().unwrap();
        assert_eq!(catalog.total_minutes(), 48);
    }

    #[test]
    fn catalog_rejects_empty() {
        assert_eq!(LessonCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = LessonCatalog::new(vec![lesson(1, 5), lesson(2, 5), lesson(1, 3)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(LessonId::new(1)));
    }

    #[test]
    fn contains_only_catalog_ids() {
        let catalog = LessonCatalog::new(vec![lesson(3, 5)]).unwrap();
        assert!(catalog.contains(LessonId::new(3)));
        assert!(!catalog.contains(LessonId::new(4)));
        assert!(!catalog.is_empty());
    }
}
