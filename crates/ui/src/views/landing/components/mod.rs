mod features;
mod footer;
mod hero;
mod language;
mod lessons;
mod progress;

pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::Hero;
pub use language::LanguageSection;
pub use lessons::LessonsSection;
pub use progress::ProgressSection;
