use dioxus::prelude::*;

use crate::vm::LessonCardVm;

use super::super::actions::LandingIntent;
use super::super::scripts::LESSONS_SECTION_ID;

#[component]
pub fn LessonsSection(lessons: Vec<LessonCardVm>, on_intent: Callback<LandingIntent>) -> Element {
    rsx! {
        section { class: "lessons-section", id: LESSONS_SECTION_ID,
            div { class: "container",
                div { class: "section-header",
                    h2 { "Interactive Lessons" }
                    p { "Learn at your own pace with hands-on tutorials" }
                }
                div { class: "lessons-grid",
                    for lesson in lessons {
                        LessonCard { key: "{lesson.id}", lesson: lesson, on_intent: on_intent }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonCard(lesson: LessonCardVm, on_intent: Callback<LandingIntent>) -> Element {
    let lesson_id = lesson.id;
    let card_class = lesson.card_class();
    let button_class = lesson.button_class();
    let button_label = lesson.button_label();

    rsx! {
        div { class: card_class,
            div { class: "lesson-header",
                h3 { class: "lesson-title", "{lesson.title}" }
                if lesson.completed {
                    div { class: "completion-badge", "✅" }
                }
            }

            p { class: "lesson-description", "{lesson.description}" }

            div { class: "lesson-meta",
                span { class: "{lesson.difficulty_class}", "{lesson.difficulty_label}" }
                span { class: "duration", "{lesson.duration_label}" }
            }

            button {
                class: button_class,
                r#type: "button",
                onclick: move |_| on_intent.call(LandingIntent::MarkComplete(lesson_id)),
                "{button_label}"
            }
        }
    }
}
