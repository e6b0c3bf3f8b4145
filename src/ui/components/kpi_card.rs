use dioxus::prelude::*;

use crate::ui::theme;

/// Small stat tile used on the profile page.
#[component]
pub fn KpiCard(title: String, value: String, icon: &'static str, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "{theme::panel()} kpi-card",
            div { class: "kpi-head",
                span { class: "kpi-icon", "{icon}" }
                h3 { class: "{theme::label_class()}", "{title}" }
            }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "{theme::text_muted()}", "{desc}" }
            }
        }
    }
}
