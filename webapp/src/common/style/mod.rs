use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* the shell is the scroll container, which is what the nav bar watches */
.site-shell {
  height: 100vh;
  overflow-y: auto;
  color: var(--text-primary);
  background-color: var(--background);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    PAGE_STYLES,
);
