use dioxus::prelude::*;
use dioxus_router::Link;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { class: "cta-button primary", to: "/", "Back to PhoneBoarder" }
        }
    }
}
