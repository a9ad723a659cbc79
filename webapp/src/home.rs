use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::Route;
use crate::components::{
    navigation::NavBar,
    overlay::{SPLASH_MS, Splash},
};
use crate::content::{ABOUT_TEXT, HOME_BLURB, PORTRAIT_SRC};

#[component]
pub fn Home() -> Element {
    let mut loading = use_signal(|| true);

    // unmounting before the splash is done drops the timer along with the task
    use_future(move || async move {
        TimeoutFuture::new(SPLASH_MS).await;
        loading.set(false);
    });

    if loading() {
        return rsx! {
            Splash {}
        };
    }

    rsx! {
        NavBar {}
        div { class: "home-container",
            // Hero section
            section { class: "hero",
                div { class: "container hero-grid",
                    div { class: "hero-text slide-in-left",
                        h1 { class: "hero-title",
                            "Creative"
                            br {}
                            "Developer"
                        }
                        p { class: "hero-subtitle", "{HOME_BLURB}" }
                        div { class: "hero-actions",
                            Link { to: Route::Portfolio {}, class: "btn btn-primary btn-lg", "View Portfolio" }
                            Link { to: Route::Blog {}, class: "btn btn-outline btn-lg", "Read Blog" }
                        }
                    }
                    div { class: "hero-portrait slide-in-right",
                        div { class: "portrait-ring",
                            img { src: PORTRAIT_SRC, alt: "Profile picture" }
                        }
                    }
                }
            }

            // About section
            section { class: "about-section",
                div { class: "container about-grid",
                    div {
                        h2 { class: "section-title", "About Me" }
                        p { class: "muted", "{ABOUT_TEXT}" }
                    }
                    div { class: "about-image",
                        img { src: PORTRAIT_SRC, alt: "About me" }
                    }
                }
            }
        }
    }
}
