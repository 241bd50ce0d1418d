use dioxus::prelude::*;

#[component]
pub fn Footer(year: i32) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-content",
                    div { class: "footer-brand",
                        h3 { "📱 PhoneBoarder" }
                        p { "Empowering everyone to master smartphones with confidence" }
                    }
                    div { class: "footer-links",
                        div { class: "link-group",
                            h4 { "Learning" }
                            a { href: "#lessons-section", "All Lessons" }
                            a { href: "#progress", "My Progress" }
                            a { href: "#help", "Help Center" }
                        }
                        div { class: "link-group",
                            h4 { "Support" }
                            a { href: "#contact", "Contact Us" }
                            a { href: "#faq", "FAQ" }
                            a { href: "#feedback", "Feedback" }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { "© {year} PhoneBoarder. Making smartphone learning accessible for everyone." }
                }
            }
        }
    }
}
