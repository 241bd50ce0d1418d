use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::landing::LandingView;
use crate::views::loading::LoadingScreen;
use crate::views::{LoadPhase, load_phase_from_resource};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let delay = ctx.loading_delay();

    let splash = use_resource(move || async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    });

    match load_phase_from_resource(&splash, delay) {
        LoadPhase::Loading => rsx! { LoadingScreen {} },
        LoadPhase::Ready => rsx! { LandingView {} },
    }
}
