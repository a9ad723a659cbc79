use dioxus::prelude::*;

mod artist;
pub use artist::ArtistPortfolio;

use crate::components::{card::Card, navigation::NavBar, typing::TypingText};
use crate::content::{
    EDUCATION, EMAIL, EXPERIENCE, HERO_PHRASES, LINKEDIN_URL, PORTFOLIO_BIO, PORTRAIT_SRC,
    ResumeItem, SITE_OWNER,
};

// the portfolio bars collapse much earlier than the rest of the site
pub const PORTFOLIO_SCROLL_THRESHOLD: f64 = 20.0;

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        NavBar { scroll_threshold: PORTFOLIO_SCROLL_THRESHOLD, logo_transition: true }
        HeroSection {}
        ResumeSection {}
    }
}

#[component]
fn HeroSection() -> Element {
    let phrases: Vec<String> = HERO_PHRASES.iter().map(|p| p.to_string()).collect();

    rsx! {
        section { class: "hero portfolio-hero",
            div { class: "container hero-grid fade-up",
                div { class: "hero-text",
                    h1 { class: "hero-title hero-name", "{SITE_OWNER}" }
                    p { class: "hero-tagline",
                        "I'm "
                        TypingText { phrases }
                    }
                    p { class: "hero-subtitle", "{PORTFOLIO_BIO}" }
                    ContactLinks {}
                    button { class: "btn btn-primary", "Download Resume" }
                }
                div { class: "hero-portrait spin-in",
                    div { class: "portrait-ring",
                        img { src: PORTRAIT_SRC, alt: "Profile photo" }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ContactLinks() -> Element {
    rsx! {
        div { class: "contact-links",
            a {
                class: "btn btn-outline btn-icon",
                href: LINKEDIN_URL,
                target: "_blank",
                title: "LinkedIn",
                "in"
            }
            a {
                class: "btn btn-outline btn-icon",
                href: "mailto:{EMAIL}",
                title: "Email",
                "✉"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ResumeColumnProps {
    heading: String,
    items: &'static [ResumeItem],
}

#[component]
fn ResumeColumn(props: ResumeColumnProps) -> Element {
    rsx! {
        div {
            h3 { class: "resume-heading", "{props.heading}" }
            ul { class: "resume-list",
                for item in props.items.iter() {
                    li { key: "{item.title}", class: "fade-up",
                        Card {
                            title: item.title.to_owned(),
                            subtitle: item.subtitle.to_owned(),
                            p { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResumeSection() -> Element {
    rsx! {
        section { id: "resume", class: "resume-section",
            div { class: "container",
                h2 { class: "section-title centered", "My Resume" }
                div { class: "resume-grid",
                    ResumeColumn { heading: "Work Experience".to_owned(), items: EXPERIENCE }
                    ResumeColumn { heading: "Education".to_owned(), items: EDUCATION }
                }
            }
        }
    }
}
