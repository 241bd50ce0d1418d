use dioxus::prelude::*;

use super::super::actions::LandingIntent;

#[component]
pub fn Hero(on_intent: Callback<LandingIntent>) -> Element {
    rsx! {
        header { class: "hero", id: "hero",
            div { class: "hero-content",
                div { class: "hero-icon", "📱" }
                h1 { class: "hero-title",
                    "Welcome to "
                    span { class: "brand", "PhoneBoarder" }
                }
                p { class: "hero-subtitle",
                    "Master your smartphone with confidence through interactive, step-by-step lessons designed for everyone."
                }
                div { class: "hero-actions",
                    button {
                        class: "cta-button primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(LandingIntent::ScrollToLessons),
                        span { "🚀" }
                        " Start Your Journey"
                    }
                    button {
                        class: "cta-button secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(LandingIntent::ScrollToLessons),
                        span { "📖" }
                        " View All Lessons"
                    }
                }
            }
            div { class: "hero-decoration",
                div { class: "floating-phone", "📱" }
                div { class: "floating-stars", "✨" }
            }
        }
    }
}
