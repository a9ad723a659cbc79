use dioxus::prelude::*;

use crate::common::publish_date;
use crate::components::{card::Card, navigation::NavBar};
use crate::content::{POSTS, Post};

#[derive(Clone, PartialEq, Props)]
struct PostCardProps {
    post: &'static Post,
    #[props(default)]
    featured: bool,
}

#[component]
fn PostCard(props: PostCardProps) -> Element {
    let (year, month, day) = props.post.published;
    let subtitle = format!("Published on {}", publish_date(year, month, day));
    let class = if props.featured { "post-card featured" } else { "post-card" };

    rsx! {
        Card {
            class: class.to_owned(),
            title: props.post.title.to_owned(),
            subtitle,
            p { class: "muted", "{props.post.preview}" }
            button { class: "btn btn-outline btn-sm", "Read More" }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    let (featured, rest) = match POSTS.split_first() {
        Some((featured, rest)) => (Some(featured), rest),
        None => (None, &[][..]),
    };

    rsx! {
        NavBar {}
        section { class: "blog-page",
            div { class: "container",
                h1 { class: "section-title", "Blog" }

                if let Some(post) = featured {
                    PostCard { post, featured: true }
                }

                if rest.is_empty() {
                    p { class: "muted centered", "More posts coming soon." }
                } else {
                    div { class: "blog-grid",
                        for post in rest.iter() {
                            PostCard { key: "{post.title}", post }
                        }
                    }
                }
            }
        }
    }
}
