//! Completion tracking over a lesson catalog.
//!
//! State is explicit: every transition takes a `CompletionSet` and returns the
//! next one, so callers (UI signals, services, tests) own where it lives.

use std::collections::BTreeSet;

use crate::model::{LessonCatalog, LessonId};

/// Lesson ids marked complete during the current session.
///
/// Only `ProgressTracker` inserts ids, and it only inserts ids present in its
/// catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    ids: BTreeSet<LessonId>,
}

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: LessonId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Completed ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.ids.iter().copied()
    }
}

/// Applies completion transitions against a fixed catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTracker<'a> {
    catalog: &'a LessonCatalog,
}

impl<'a> ProgressTracker<'a> {
    #[must_use]
    pub fn new(catalog: &'a LessonCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a LessonCatalog {
        self.catalog
    }

    /// Marks `id` complete. Already-complete ids and ids outside the catalog
    /// leave the set unchanged.
    #[must_use]
    pub fn mark_complete(&self, mut state: CompletionSet, id: LessonId) -> CompletionSet {
        if self.catalog.contains(id) {
            state.ids.insert(id);
        }
        state
    }

    /// Clears all progress.
    #[must_use]
    pub fn reset(&self, _state: CompletionSet) -> CompletionSet {
        CompletionSet::new()
    }

    /// `round(100 * completed / total)`, halves rounding up.
    #[must_use]
    pub fn progress_percent(&self, state: &CompletionSet) -> u8 {
        let total = self.catalog.len();
        if total == 0 {
            return 0;
        }
        let done = state.len().min(total);
        let percent = (200 * done + total) / (2 * total);
        u8::try_from(percent).unwrap_or(100)
    }

    #[must_use]
    pub fn remaining(&self, state: &CompletionSet) -> usize {
        self.catalog.len().saturating_sub(state.len())
    }

    #[must_use]
    pub fn is_complete(&self, state: &CompletionSet) -> bool {
        state.len() >= self.catalog.len()
    }
}
