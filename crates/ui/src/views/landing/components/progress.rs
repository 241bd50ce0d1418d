use dioxus::prelude::*;

use crate::vm::ProgressVm;

use super::super::actions::LandingIntent;

#[component]
pub fn ProgressSection(progress: ProgressVm, on_intent: Callback<LandingIntent>) -> Element {
    rsx! {
        section { class: "progress-section", id: "progress",
            div { class: "container",
                div { class: "progress-header",
                    h2 { "Your Learning Progress" }
                    div { class: "progress-actions",
                        span { class: "progress-text", "{progress.completed_label}" }
                        button {
                            class: "reset-button",
                            r#type: "button",
                            onclick: move |_| on_intent.call(LandingIntent::Reset),
                            "🔄 Reset"
                        }
                    }
                }

                div { class: "progress-container",
                    div {
                        class: "progress-bar",
                        role: "progressbar",
                        "aria-valuenow": "{progress.percent}",
                        "aria-valuemin": "0",
                        "aria-valuemax": "100",
                        div { class: "progress-fill", style: "{progress.fill_style}" }
                        div { class: "progress-percentage", "{progress.percent_label}" }
                    }
                }

                div { class: "progress-stats",
                    Stat { value: progress.completed.to_string(), label: "Completed" }
                    Stat { value: progress.remaining.to_string(), label: "Remaining" }
                    Stat { value: progress.total_time_label.clone(), label: "Total Time" }
                }
            }
        }
    }
}

#[component]
fn Stat(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "stat",
            span { class: "stat-number", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
