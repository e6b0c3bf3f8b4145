use dioxus::prelude::*;

use crate::domain::carousel::{next_index, prev_index};

#[component]
pub fn ImageCarousel(images: Vec<String>, alt: String, #[props(default)] large: bool) -> Element {
    let mut current = use_signal(|| 0usize);
    let len = images.len();
    let class = if large { "carousel carousel-large" } else { "carousel" };

    let Some(src) = images.get(current() % len.max(1)).cloned() else {
        return rsx! {
            div { class: "{class} carousel-empty", span { "📖" } }
        };
    };

    rsx! {
        div { class: "{class}",
            img { src: "{src}", alt: "{alt}" }
            if len > 1 {
                button {
                    class: "carousel-nav carousel-prev",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        current.set(prev_index(current(), len));
                    },
                    "‹"
                }
                button {
                    class: "carousel-nav carousel-next",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        current.set(next_index(current(), len));
                    },
                    "›"
                }
                div { class: "carousel-dots",
                    for index in 0..len {
                        span {
                            key: "{index}",
                            class: if index == current() % len { "dot dot-on" } else { "dot" },
                        }
                    }
                }
            }
        }
    }
}
