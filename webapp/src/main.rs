#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
mod components;
mod content;

mod shell;
use shell::SiteShell;

mod home;
use home::Home;

mod portfolio;
use portfolio::{ArtistPortfolio, Portfolio};

mod blog;
use blog::Blog;

mod placeholder;
use placeholder::{About, Contact, NotFound};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// every page brings its own NavBar, since the pages disagree on when the bar should collapse
// and what the logo does.  the shell only provides the shared context and scroll container
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
        #[nest("/portfolio")]
            #[route("/")]
            Portfolio {},
            #[route("/artist")]
            ArtistPortfolio {},
        #[end_nest]
        #[route("/blog")]
        Blog {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
