use std::time::Duration;

use dioxus::prelude::ReadableExt;
use boarder_core::model::LessonId;

use super::LandingIntent;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with};

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_catalog_and_empty_progress() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome to"), "missing hero in {html}");
    assert!(html.contains("0 of 6 lessons completed"), "missing count in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
    assert!(html.contains("48 min"), "missing total time in {html}");
    assert_eq!(count(&html, "Start Lesson"), 6, "expected six lesson buttons in {html}");
    assert!(html.contains("Making Calls"), "missing first lesson in {html}");
    assert!(html.contains("Internet Browsing"), "missing last lesson in {html}");
    assert!(html.contains("⏱️ 12 min"), "missing duration in {html}");
    assert!(html.contains("English</strong>"), "missing language label in {html}");
    assert!(html.contains("Why Choose PhoneBoarder?"), "missing features in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_shows_loading_screen_while_delayed() {
    let mut harness =
        setup_view_harness_with(ViewKind::Home, Duration::from_secs(60), "English");
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Loading PhoneBoarder..."), "missing loader in {html}");
    assert!(!html.contains("Interactive Lessons"), "page rendered too early: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn marking_a_lesson_updates_progress_and_card() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    harness.dispatch(LandingIntent::MarkComplete(LessonId::new(1)));
    let html = harness.render();

    assert!(html.contains("1 of 6 lessons completed"), "missing count in {html}");
    assert!(html.contains("17%"), "missing percent in {html}");
    assert!(html.contains("width: 17%;"), "missing bar width in {html}");
    assert!(html.contains("✅ Completed"), "missing completed button in {html}");
    assert_eq!(count(&html, "Start Lesson"), 5, "expected five open lessons in {html}");
    assert!(html.contains("48 min"), "total time changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_marks_are_idempotent() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    harness.dispatch(LandingIntent::MarkComplete(LessonId::new(2)));
    harness.dispatch(LandingIntent::MarkComplete(LessonId::new(2)));
    harness.dispatch(LandingIntent::MarkComplete(LessonId::new(77)));

    let state = harness.handles.state();
    let completed = harness.dom.in_runtime(|| state.completed.peek().len());
    assert_eq!(completed, 1);
    assert!(harness.render().contains("1 of 6 lessons completed"));
}

#[tokio::test(flavor = "current_thread")]
async fn reset_returns_to_zero() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    for id in 1..=3 {
        harness.dispatch(LandingIntent::MarkComplete(LessonId::new(id)));
    }
    let html = harness.render();
    assert!(html.contains("width: 50%;"), "missing half bar in {html}");

    harness.dispatch(LandingIntent::Reset);
    let html = harness.render();
    assert!(html.contains("0 of 6 lessons completed"), "missing reset count in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
    assert_eq!(count(&html, "Start Lesson"), 6, "lessons still completed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn selecting_a_language_only_changes_the_label() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    harness.dispatch(LandingIntent::SelectLanguage("Deutsch".to_string()));
    let html = harness.render();
    assert!(html.contains("Deutsch</strong>"), "missing selected label in {html}");
    assert!(html.contains("Interactive Lessons"), "copy should stay untranslated: {html}");

    harness.dispatch(LandingIntent::SelectLanguage("Klingon".to_string()));
    let html = harness.render();
    assert!(html.contains("Deutsch</strong>"), "unknown code replaced label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_initial_language_falls_back_to_default() {
    let mut harness = setup_view_harness_with(ViewKind::Home, Duration::ZERO, "Latin");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("English</strong>"), "missing fallback label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn footer_uses_clock_year() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("© 2023 PhoneBoarder."), "missing footer year in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_links_home() {
    let mut harness = setup_view_harness(ViewKind::NotFound);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Page not found"), "missing title in {html}");
    assert!(html.contains("Nothing lives at"), "missing path note in {html}");
    assert!(html.contains("99"), "missing requested path in {html}");
    assert!(html.contains("Back to PhoneBoarder"), "missing home link in {html}");
}
