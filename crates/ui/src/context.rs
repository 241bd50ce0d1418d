use std::sync::Arc;
use std::time::Duration;

use services::TutorialService;

pub trait UiApp: Send + Sync {
    fn tutorial(&self) -> Arc<TutorialService>;

    /// How long the splash screen stays up. Zero skips it.
    fn loading_delay(&self) -> Duration;

    /// Language code selected when the page first renders.
    fn initial_language(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    tutorial: Arc<TutorialService>,
    loading_delay: Duration,
    initial_language: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let tutorial = app.tutorial();
        let requested = app.initial_language();
        // Fall back to the catalog default rather than showing a label the selector can't highlight.
        let initial_language = match tutorial.select_language(&requested) {
            Ok(language) => language.code().to_owned(),
            Err(_) => tutorial.default_language().code().to_owned(),
        };

        Self {
            tutorial,
            loading_delay: app.loading_delay(),
            initial_language,
        }
    }

    #[must_use]
    pub fn tutorial(&self) -> Arc<TutorialService> {
        Arc::clone(&self.tutorial)
    }

    #[must_use]
    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    #[must_use]
    pub fn initial_language(&self) -> String {
        self.initial_language.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
