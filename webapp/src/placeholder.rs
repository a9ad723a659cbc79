use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::navigation::NavBar;
use crate::content::{ABOUT_TEXT, EMAIL};

#[derive(Clone, PartialEq, Props)]
struct PlaceholderPageProps {
    title: String,
    children: Element,
}

#[component]
fn PlaceholderPage(props: PlaceholderPageProps) -> Element {
    rsx! {
        NavBar {}
        section { class: "placeholder-page",
            div { class: "container fade-up",
                h1 { class: "section-title", "{props.title}" }
                {props.children}
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        PlaceholderPage { title: "About".to_owned(),
            p { class: "muted", "{ABOUT_TEXT}" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        PlaceholderPage { title: "Contact".to_owned(),
            p { class: "muted", "The best way to reach me is by email." }
            a { class: "btn btn-primary", href: "mailto:{EMAIL}", "{EMAIL}" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        PlaceholderPage { title: "Page not found".to_owned(),
            p { class: "muted", "There is nothing at /{path}" }
            Link { class: "btn btn-outline", to: Route::Home {}, "Back home" }
        }
    }
}
