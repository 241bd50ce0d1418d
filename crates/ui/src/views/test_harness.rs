use std::sync::Arc;
use std::time::Duration;

use boarder_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::TutorialService;

use crate::context::{UiApp, build_app_context};
use crate::views::landing::LandingTestHandles;
use crate::views::{HomeView, LandingIntent, NotFoundView};

#[derive(Clone)]
struct TestApp {
    tutorial: Arc<TutorialService>,
    loading_delay: Duration,
    initial_language: String,
}

impl UiApp for TestApp {
    fn tutorial(&self) -> Arc<TutorialService> {
        Arc::clone(&self.tutorial)
    }

    fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    fn initial_language(&self) -> String {
        self.initial_language.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    NotFound,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: LandingTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::NotFound => rsx! {
            NotFoundView { segments: vec!["lessons".to_string(), "99".to_string()] }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: LandingTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Sends an intent through the landing dispatcher and flushes the resulting render.
    pub fn dispatch(&mut self, intent: LandingIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Duration::ZERO, "English")
}

pub fn setup_view_harness_with(
    view: ViewKind,
    loading_delay: Duration,
    initial_language: &str,
) -> ViewHarness {
    let tutorial = Arc::new(TutorialService::builtin(fixed_clock()).expect("builtin catalogs"));
    let app = Arc::new(TestApp {
        tutorial,
        loading_delay,
        initial_language: initial_language.to_string(),
    });
    let handles = LandingTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
