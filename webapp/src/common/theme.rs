use serde::{Deserialize, Serialize};

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    // the button shows where a click takes you, not where you are
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn load() -> Self {
        get_local_storage(THEME_KEY).unwrap_or_default()
    }

    pub fn store(self) {
        set_local_storage(THEME_KEY, self)
    }
}
