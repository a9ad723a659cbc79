use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::error;

use cycler::{
    Timer, TypingConfig, TypingCycler,
    typing::{DEFAULT_PAUSE_MS, DEFAULT_TYPE_SPEED_MS},
};

// browser timers for the cycler
//
// dropping a TimeoutFuture clears the underlying setTimeout, which is what makes unmounting
// the component cancel the pending tick
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Sleep = TimeoutFuture;

    fn sleep(&self, delay: Duration) -> TimeoutFuture {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TypingTextProps {
    phrases: Vec<String>,

    #[props(default = DEFAULT_TYPE_SPEED_MS)]
    type_speed: u64,

    #[props(default = DEFAULT_PAUSE_MS)]
    pause: u64,
}

// TypingText
//
// the props are only read once, when the component mounts; the cycler owns all of the state
// after that and the signal just mirrors its text so that dioxus knows to re-render
#[component]
pub fn TypingText(props: TypingTextProps) -> Element {
    let displayed = use_signal(String::new);

    let config = TypingConfig {
        phrases: props.phrases,
        type_speed_ms: props.type_speed,
        pause_ms: props.pause,
    };

    // dioxus drops this task when the component unmounts, taking the pending timer with it
    use_future(move || {
        let config = config.clone();
        let mut displayed = displayed;

        async move {
            let typing = match TypingCycler::from_config(&config) {
                Ok(v) => v,
                Err(err) => {
                    error!("not starting typing animation: {err}");
                    return;
                }
            };

            cycler::run(typing, GlooTimer, move |typing: &TypingCycler| {
                displayed.set(typing.displayed_text().to_owned())
            })
            .await
        }
    });

    rsx! {
        span { class: "typing-text",
            "{displayed}"
            span { class: "typing-caret", "|" }
        }
    }
}
