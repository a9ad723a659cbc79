use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::overlay::LogoTransition;
use crate::content::LOGO_TEXT;
use crate::shell::SiteContext;

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

// home is the parent of every route, so it is only active on an exact match
#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    let active = current_path == target
        || (!matches!(target, Route::Home {}) && current_path.is_child_of(&target));

    rsx! {
        Link { class: if active { "nav-link active" } else { "nav-link" }, to: target, "{name}" }
    }
}

#[component]
fn NavBarLinks() -> Element {
    rsx! {
        NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
        NavBarButton { name: "Portfolio".to_owned(), target: Route::Portfolio {} }
        NavBarButton { name: "Blog".to_owned(), target: Route::Blog {} }
        NavBarButton { name: "About".to_owned(), target: Route::About {} }
        NavBarButton { name: "Contact".to_owned(), target: Route::Contact {} }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_context::<SiteContext>();
    let icon = ctx.theme().toggle_icon();

    rsx! {
        button {
            class: "btn btn-outline btn-icon theme-toggle",
            title: "Toggle theme",
            onclick: move |_| ctx.toggle_theme(),
            "{icon}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    // how far the page has to scroll before the bar switches to its compact style
    #[props(default = DEFAULT_SCROLL_THRESHOLD)]
    scroll_threshold: f64,

    // clicking the logo plays the transition into the artist page instead of going home
    #[props(default)]
    logo_transition: bool,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let ctx = use_context::<SiteContext>();
    let mut menu_open = use_signal(|| false);
    let mut transitioning = use_signal(|| false);

    let nav_class = if ctx.scrolled_past(props.scroll_threshold) {
        "site-nav scrolled"
    } else {
        "site-nav"
    };

    rsx! {
        if transitioning() {
            LogoTransition {}
        }
        nav { class: "{nav_class}",
            div { class: "nav-container",
                if props.logo_transition {
                    button {
                        class: "nav-logo",
                        onclick: move |_| transitioning.set(true),
                        "{LOGO_TEXT}"
                    }
                } else {
                    Link { class: "nav-logo", to: Route::Home {}, "{LOGO_TEXT}" }
                }

                div { class: "nav-links",
                    NavBarLinks {}
                    ThemeToggle {}
                }

                button {
                    class: "btn btn-outline btn-sm nav-menu-button",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() {
                        "✕"
                    } else {
                        "Menu"
                    }
                }
            }

            // any click inside the dropdown (i.e. following a link) closes it again
            if menu_open() {
                div {
                    class: "nav-dropdown",
                    onclick: move |_| menu_open.set(false),
                    NavBarLinks {}
                    ThemeToggle {}
                }
            }
        }
    }
}
