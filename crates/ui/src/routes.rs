use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{HomeView, NotFoundView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", HomeView)] Home {},
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}
