use dioxus::prelude::*;

use crate::domain::condition_label;

/// Five stars, `condition` of them filled, followed by the grade name.
#[component]
pub fn ConditionStars(condition: u8, #[props(default = true)] show_label: bool) -> Element {
    let filled = condition.min(5) as usize;
    rsx! {
        span { class: "stars", title: "{condition_label(condition)}",
            for index in 0..5usize {
                span {
                    key: "{index}",
                    class: if index < filled { "star star-on" } else { "star" },
                    "★"
                }
            }
            if show_label {
                span { class: "stars-label", "{condition_label(condition)}" }
            }
        }
    }
}
