use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    title: String,
    subtitle: Option<String>,
    #[props(default)]
    class: String,
    children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div { class: "card {props.class}",
            div { class: "card-header",
                h3 { class: "card-title", "{props.title}" }
                if let Some(subtitle) = props.subtitle {
                    p { class: "card-subtitle", "{subtitle}" }
                }
            }
            div { class: "card-content", {props.children} }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    label: String,
    #[props(default)]
    secondary: bool,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span { class: if props.secondary { "badge badge-secondary" } else { "badge" }, "{props.label}" }
    }
}
