mod home;
mod landing;
mod loading;
mod not_found;
mod state;

pub use home::HomeView;
pub use landing::{LandingIntent, LandingView};
pub use loading::LoadingScreen;
pub use not_found::NotFoundView;
pub use state::{LoadPhase, load_phase_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
