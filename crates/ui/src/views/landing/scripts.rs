use dioxus::document::eval;

pub(crate) const LESSONS_SECTION_ID: &str = "lessons-section";

const SCROLL_INTO_VIEW_TEMPLATE: &str = r#"
    document.getElementById("{element_id}")?.scrollIntoView({ behavior: "smooth" });
"#;

pub(super) fn scroll_into_view_script(element_id: &str) -> String {
    SCROLL_INTO_VIEW_TEMPLATE.replace("{element_id}", element_id)
}

pub(super) fn scroll_to_lessons() {
    let _ = eval(&scroll_into_view_script(LESSONS_SECTION_ID));
}
