use dioxus::prelude::*;

use crate::vm::LanguageOptionVm;

use super::super::actions::LandingIntent;

#[component]
pub fn LanguageSection(
    languages: Vec<LanguageOptionVm>,
    current_language: String,
    on_intent: Callback<LandingIntent>,
) -> Element {
    rsx! {
        section { class: "language-section", id: "language",
            div { class: "container",
                div { class: "language-header",
                    h2 { "🌍 Choose Your Language" }
                    p { "Learn in your preferred language for better understanding" }
                }

                div { class: "language-selector",
                    for option in languages {
                        LanguageButton { key: "{option.code}", option: option, on_intent: on_intent }
                    }
                }

                div { class: "current-language",
                    span {
                        "Currently learning in: "
                        strong { "{current_language}" }
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageButton(option: LanguageOptionVm, on_intent: Callback<LandingIntent>) -> Element {
    let class = option.class();
    let code = option.code.clone();

    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| on_intent.call(LandingIntent::SelectLanguage(code.clone())),
            span { class: "language-flag", "{option.flag}" }
            span { class: "language-name", "{option.name}" }
        }
    }
}
