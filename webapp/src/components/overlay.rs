use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::Route;
use crate::content::LOGO_TEXT;

pub const SPLASH_MS: u32 = 2000;
pub const LOGO_TRANSITION_MS: u32 = 1500;

// the loading square shown while the home page "warms up".  the animation itself is css
#[component]
pub fn Splash() -> Element {
    rsx! {
        div { class: "splash",
            div { class: "splash-mark" }
        }
    }
}

// LogoTransition
//
// full-screen overlay shown after clicking the portfolio logo: the monogram spins out, the
// artist mark spins in, and once the animation has had time to play we move on to the artist
// page.  if the overlay is unmounted first (the user navigated some other way), the timer goes
// with it and nothing happens
#[component]
pub fn LogoTransition() -> Element {
    let nav = navigator();

    use_future(move || async move {
        TimeoutFuture::new(LOGO_TRANSITION_MS).await;
        nav.push(Route::ArtistPortfolio {});
    });

    rsx! {
        div { class: "logo-transition",
            div { class: "logo-transition-spin",
                span { class: "logo-transition-monogram", "{LOGO_TEXT}" }
                span { class: "logo-transition-mark", "🎨" }
            }
        }
    }
}
