use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{ProgressVm, current_language_label, map_language_options, map_lesson_cards};

use super::actions::{LandingIntent, use_landing_dispatcher};
use super::components::{
    FeaturesSection, Footer, Hero, LanguageSection, LessonsSection, ProgressSection,
};
use super::state::{LandingState, use_landing_state};

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let tutorial = ctx.tutorial();
    let state = use_landing_state(ctx.initial_language());
    let dispatch = use_landing_dispatcher(state, ctx.tutorial());

    use_test_handles(dispatch, state);

    let completed = state.completed.cloned();
    let selected = state.language.cloned();

    let progress = ProgressVm::from(&tutorial.summary(&completed));
    let lessons = map_lesson_cards(tutorial.catalog(), &completed);
    let languages = map_language_options(tutorial.languages(), &selected);
    let current_language = current_language_label(tutorial.languages(), &selected);
    let year = tutorial.current_year();

    rsx! {
        div { class: "app",
            Hero { on_intent: dispatch }
            ProgressSection { progress: progress, on_intent: dispatch }
            LessonsSection { lessons: lessons, on_intent: dispatch }
            LanguageSection {
                languages: languages,
                current_language: current_language,
                on_intent: dispatch,
            }
            FeaturesSection {}
            Footer { year: year }
        }
    }
}

#[cfg(not(test))]
fn use_test_handles(_dispatch: Callback<LandingIntent>, _state: LandingState) {}

#[cfg(test)]
fn use_test_handles(dispatch: Callback<LandingIntent>, state: LandingState) {
    use_hook(|| {
        if let Some(handles) = try_consume_context::<LandingTestHandles>() {
            handles.register(dispatch, state);
        }
    });
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LandingTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<LandingIntent>>>>,
    state: std::rc::Rc<std::cell::RefCell<Option<LandingState>>>,
}

#[cfg(test)]
impl LandingTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<LandingIntent>,
        state: LandingState,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<LandingIntent> {
        (*self.dispatch.borrow()).expect("landing dispatch registered")
    }

    pub(crate) fn state(&self) -> LandingState {
        (*self.state.borrow()).expect("landing state registered")
    }
}
