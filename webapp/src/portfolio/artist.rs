use dioxus::prelude::*;

use super::{ContactLinks, PORTFOLIO_SCROLL_THRESHOLD};
use crate::components::{
    card::{Badge, Card},
    navigation::NavBar,
};
use crate::content::{ARTIST_TAGLINE, CERTIFICATIONS, PROJECTS, ROLES, SITE_OWNER, SKILLS};

#[component]
pub fn ArtistPortfolio() -> Element {
    rsx! {
        NavBar { scroll_threshold: PORTFOLIO_SCROLL_THRESHOLD }
        div { class: "artist-page",
            section { class: "hero artist-hero",
                div { class: "container fade-up",
                    h1 { class: "hero-title", "{SITE_OWNER}" }
                    p { class: "hero-subtitle", "{ARTIST_TAGLINE}" }
                    ContactLinks {}
                }
            }

            section { class: "artist-section",
                div { class: "container",
                    h2 { class: "section-title", "Professional Experience" }
                    div { class: "artist-grid",
                        for role in ROLES.iter() {
                            Card {
                                key: "{role.title}",
                                title: role.title.to_owned(),
                                subtitle: role.subtitle.to_owned(),
                                ul { class: "highlight-list",
                                    for highlight in role.highlights.iter() {
                                        li { key: "{highlight}", "{highlight}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "artist-section",
                div { class: "container",
                    h2 { class: "section-title", "Featured Projects" }
                    div { class: "artist-grid",
                        for project in PROJECTS.iter() {
                            Card {
                                key: "{project.title}",
                                title: project.title.to_owned(),
                                subtitle: project.period.to_owned(),
                                p { class: "muted", "{project.summary}" }
                                Badge { label: format!("Team Size: {}", project.team_size) }
                            }
                        }
                    }
                }
            }

            section { class: "artist-section",
                div { class: "container",
                    h2 { class: "section-title", "Skills" }
                    div { class: "badge-row",
                        for skill in SKILLS.iter() {
                            Badge { key: "{skill}", label: skill.to_string(), secondary: true }
                        }
                    }
                }
            }

            section { class: "artist-section",
                div { class: "container",
                    h2 { class: "section-title", "Certifications" }
                    ul { class: "certification-list",
                        for certification in CERTIFICATIONS.iter() {
                            li { key: "{certification}", "{certification}" }
                        }
                    }
                }
            }
        }
    }
}
