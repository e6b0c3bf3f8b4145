use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

/// URL entry plus thumbnails. `on_add` returns whether the URL was accepted.
#[component]
pub fn ImageListField(
    images: Vec<String>,
    on_add: EventHandler<String>,
    on_remove: EventHandler<usize>,
) -> Element {
    let mut pending = use_signal(String::new);

    rsx! {
        div { class: "field",
            label { class: "{theme::label_class()}", "Images" }
            div { class: "inline-row",
                input {
                    class: "{theme::input_class()}",
                    placeholder: "https://…/cover.jpg",
                    value: pending(),
                    oninput: move |evt| pending.set(evt.value()),
                }
                button {
                    class: "{theme::btn_small(Tone::Secondary)}",
                    r#type: "button",
                    onclick: move |_| {
                        on_add.call(pending());
                        pending.set(String::new());
                    },
                    "Add"
                }
            }
            if images.is_empty() {
                p { class: "{theme::text_muted()}", "At least one image is required." }
            }
            div { class: "thumbs",
                for (index, url) in images.into_iter().enumerate() {
                    div { key: "{url}", class: "thumb",
                        img { src: "{url}", alt: "" }
                        button {
                            class: "thumb-remove",
                            r#type: "button",
                            onclick: move |_| on_remove.call(index),
                            "✕"
                        }
                    }
                }
            }
        }
    }
}
