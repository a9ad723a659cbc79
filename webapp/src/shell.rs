use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;
use crate::common::theme::Theme;

// SiteContext
//
// the theme and the scroll position are needed all over the place (mostly by the nav bars),
// so rather than each component listening to the window on its own, the shell owns them and
// hands them down through the context
#[derive(Clone, Copy, PartialEq)]
pub struct SiteContext {
    pub theme: Signal<Theme>,
    pub scroll_y: Signal<f64>,
}

impl SiteContext {
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn scrolled_past(&self, threshold: f64) -> bool {
        *self.scroll_y.read() > threshold
    }

    pub fn toggle_theme(&self) {
        let mut theme = self.theme;
        let next = self.theme().toggled();

        theme.set(next);
        next.store();
    }
}

// SiteShell
//
// the layout wrapping every route.  the page scrolls inside this div rather than the window,
// which lets us read the offset off the mounted element instead of reaching for web_sys
#[component]
pub fn SiteShell() -> Element {
    let theme = use_signal(Theme::load);
    let mut scroll_y = use_signal(|| 0.0);
    let mut viewport: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let ctx = use_context_provider(|| SiteContext { theme, scroll_y });

    let track_scroll = move |_: ScrollEvent| async move {
        let Some(element) = viewport() else {
            return;
        };

        match element.get_scroll_offset().await {
            Ok(offset) => scroll_y.set(offset.y),
            Err(err) => debug!("failed to read scroll offset: {err:?}"),
        }
    };

    let theme_class = ctx.theme().class();

    rsx! {
        div {
            class: "site-shell {theme_class}",
            onmounted: move |evt| viewport.set(Some(evt.data())),
            onscroll: track_scroll,
            Outlet::<Route> {}
        }
    }
}
