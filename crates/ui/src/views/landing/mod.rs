mod actions;
mod components;
mod scripts;
pub(crate) mod state;
mod view;

pub use actions::LandingIntent;
pub use view::LandingView;

#[cfg(test)]
pub(crate) use view::LandingTestHandles;
