use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// Splash phase for a delay resource. A zero delay is ready immediately; any
/// non-pending resource state counts as ready so the splash can never stick.
#[must_use]
pub fn load_phase_from_resource(resource: &Resource<()>, delay: Duration) -> LoadPhase {
    if delay.is_zero() {
        return LoadPhase::Ready;
    }
    match resource.state().cloned() {
        UseResourceState::Pending => LoadPhase::Loading,
        UseResourceState::Ready | UseResourceState::Paused | UseResourceState::Stopped => {
            LoadPhase::Ready
        }
    }
}
