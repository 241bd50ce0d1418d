use dioxus::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🎯",
        "Personalized Learning",
        "Tailored lessons that adapt to your learning pace and style",
    ),
    (
        "👥",
        "Beginner Friendly",
        "No prior experience needed - we start from the very basics",
    ),
    (
        "🏆",
        "Track Progress",
        "Monitor your achievements and celebrate your milestones",
    ),
    (
        "🌐",
        "Multiple Languages",
        "Learn in your native language for better comprehension",
    ),
];

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { class: "features-section", id: "features",
            div { class: "container",
                h2 { "Why Choose PhoneBoarder?" }
                div { class: "features-grid",
                    for (icon, title, body) in FEATURES {
                        div { key: "{title}", class: "feature",
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}
