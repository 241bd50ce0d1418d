use dioxus::prelude::*;

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "loader" }
            h2 { "Loading PhoneBoarder..." }
            p { "Preparing your learning journey" }
        }
    }
}
