use dioxus::prelude::*;

use crate::{
    domain::{
        catalog::{CONDITION_CHOICES, GENRE_CHOICES},
        condition_label, OwnedItemDraft,
    },
    ui::{
        components::image_list::ImageListField,
        theme::{self, Tone},
    },
    util::config::AppConfig,
};

/// Registers another of the user's books so it can go into an offer.
#[component]
pub fn OwnedItemDialog(
    on_close: EventHandler<()>,
    on_submit: EventHandler<OwnedItemDraft>,
) -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let currency = config.with(|cfg| cfg.currency_symbol.clone());
    let mut draft = use_signal(OwnedItemDraft::default);
    let can_submit = draft.with(|d| d.can_submit());

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog",
                h2 { class: "{theme::heading()}", "Add Your Book" }
                div { class: "form-grid",
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Title" }
                        input {
                            class: "{theme::input_class()}",
                            value: draft.with(|d| d.title.clone()),
                            oninput: move |evt| draft.with_mut(|d| d.title = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Author" }
                        input {
                            class: "{theme::input_class()}",
                            value: draft.with(|d| d.author.clone()),
                            oninput: move |evt| draft.with_mut(|d| d.author = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Condition" }
                        select {
                            class: "{theme::select_class()}",
                            value: draft.with(|d| d.condition.to_string()),
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse::<u8>() {
                                    draft.with_mut(|d| d.condition = value);
                                }
                            },
                            for choice in CONDITION_CHOICES.iter() {
                                option {
                                    value: "{choice}",
                                    "{condition_label(choice.parse().unwrap_or_default())}"
                                }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Genre" }
                        select {
                            class: "{theme::select_class()}",
                            value: draft.with(|d| d.genre.clone()),
                            onchange: move |evt| draft.with_mut(|d| d.genre = evt.value()),
                            option { value: "", "Choose a genre" }
                            for genre in GENRE_CHOICES.iter() {
                                option { value: "{genre}", "{genre}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Acquired on" }
                        input {
                            class: "{theme::input_class()}",
                            r#type: "date",
                            value: draft.with(|d| d.acquired_on.clone()),
                            oninput: move |evt| draft.with_mut(|d| d.acquired_on = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Estimated value ({currency})" }
                        input {
                            class: "{theme::input_class()}",
                            r#type: "number",
                            min: "0",
                            value: draft.with(|d| d.estimated_value.clone()),
                            oninput: move |evt| draft.with_mut(|d| d.estimated_value = evt.value()),
                        }
                    }
                }
                div { class: "field",
                    label { class: "{theme::label_class()}", "Description" }
                    textarea {
                        class: "{theme::textarea_class()}",
                        rows: "3",
                        value: draft.with(|d| d.description.clone()),
                        oninput: move |evt| draft.with_mut(|d| d.description = evt.value()),
                    }
                }
                ImageListField {
                    images: draft.with(|d| d.images.clone()),
                    on_add: move |url: String| {
                        draft.with_mut(|d| {
                            d.add_image(&url);
                        });
                    },
                    on_remove: move |index: usize| draft.with_mut(|d| d.remove_image(index)),
                }
                div { class: "dialog-actions",
                    button {
                        class: "{theme::btn(Tone::Ghost)}",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "{theme::btn(Tone::Primary)}",
                        disabled: !can_submit,
                        onclick: move |_| on_submit.call(draft()),
                        "Add to My Books"
                    }
                }
            }
        }
    }
}
