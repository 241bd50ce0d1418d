use boarder_core::CompletionSet;
use dioxus::prelude::*;

/// Session state for the landing page. Lives only as long as the view.
#[derive(Clone, Copy)]
pub(crate) struct LandingState {
    pub(crate) completed: Signal<CompletionSet>,
    pub(crate) language: Signal<String>,
}

pub(crate) fn use_landing_state(initial_language: String) -> LandingState {
    let completed = use_signal(CompletionSet::new);
    let language = use_signal(move || initial_language);
    LandingState {
        completed,
        language,
    }
}
