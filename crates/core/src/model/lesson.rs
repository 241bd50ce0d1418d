use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id must be > 0")]
    ZeroId,

    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson duration must be > 0 minutes")]
    ZeroDuration,
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How demanding a lesson is for a first-time smartphone user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Human-readable label, as shown on lesson badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Lowercase slug, used as a CSS modifier.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {raw}")]
pub struct ParseDifficultyError {
    raw: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(ParseDifficultyError { raw: s.to_string() }),
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A single tutorial topic in the catalog.
///
/// Lessons are static metadata: they are built once at startup and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    difficulty: Difficulty,
    duration_minutes: u32,
}

impl Lesson {
    /// Creates a new lesson.
    ///
    /// Title and description are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the id or duration is zero, or the title is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        duration_minutes: u32,
    ) -> Result<Self, LessonError> {
        if id.value() == 0 {
            return Err(LessonError::ZeroId);
        }

        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle);
        }

        if duration_minutes == 0 {
            return Err(LessonError::ZeroDuration);
        }

        Ok(Self {
            id,
            title,
            description: description.into().trim().to_owned(),
            difficulty,
            duration_minutes,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}
