use std::sync::Arc;

use boarder_core::model::LessonId;
use dioxus::prelude::*;
use services::TutorialService;
use tracing::{debug, warn};

use super::scripts::scroll_to_lessons;
use super::state::LandingState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandingIntent {
    MarkComplete(LessonId),
    Reset,
    SelectLanguage(String),
    ScrollToLessons,
}

/// Single entry point for every landing-page mutation.
pub(crate) fn use_landing_dispatcher(
    state: LandingState,
    tutorial: Arc<TutorialService>,
) -> Callback<LandingIntent> {
    let mut completed = state.completed;
    let mut language = state.language;

    use_callback(move |intent: LandingIntent| match intent {
        LandingIntent::MarkComplete(lesson_id) => {
            let current = (*completed.peek()).clone();
            completed.set(tutorial.mark_complete(current, lesson_id));
        }
        LandingIntent::Reset => {
            let current = (*completed.peek()).clone();
            completed.set(tutorial.reset(current));
        }
        LandingIntent::SelectLanguage(code) => match tutorial.select_language(&code) {
            Ok(selected) => language.set(selected.code().to_owned()),
            Err(err) => warn!(%err, "language selection ignored"),
        },
        LandingIntent::ScrollToLessons => {
            debug!("scrolling to lessons");
            scroll_to_lessons();
        }
    })
}
