#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}
