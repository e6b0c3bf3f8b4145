use dioxus::prelude::*;

use crate::{
    domain::{
        catalog::{CONDITION_CHOICES, GENRE_CHOICES},
        condition_label, ListingDraft,
    },
    ui::{
        components::image_list::ImageListField,
        theme::{self, Tone},
    },
    util::config::AppConfig,
};

/// "Add a book" form for the local user's profile.
#[component]
pub fn AddBookDialog(on_close: EventHandler<()>, on_submit: EventHandler<ListingDraft>) -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let currency = config.with(|cfg| cfg.currency_symbol.clone());
    let mut draft = use_signal(ListingDraft::default);
    let can_submit = draft.with(|d| d.can_submit());

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog",
                h2 { class: "{theme::heading()}", "Add a Book" }
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
                        label { class: "{theme::label_class()}", "Asking price ({currency})" }
                        input {
                            class: "{theme::input_class()}",
                            r#type: "number",
                            min: "0",
                            value: draft.with(|d| d.asking_price.clone()),
                            oninput: move |evt| draft.with_mut(|d| d.asking_price = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Purchase date" }
                        input {
                            class: "{theme::input_class()}",
                            r#type: "date",
                            value: draft.with(|d| d.purchase_date.clone()),
                            oninput: move |evt| draft.with_mut(|d| d.purchase_date = evt.value()),
                        }
                    }
                }
                div { class: "field",
                    label { class: "{theme::label_class()}", "Books you'd accept in exchange" }
                    input {
                        class: "{theme::input_class()}",
                        placeholder: "Comma separated titles",
                        value: draft.with(|d| d.asking_books.clone()),
                        oninput: move |evt| draft.with_mut(|d| d.asking_books = evt.value()),
                    }
                }
                label { class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: draft.with(|d| d.bought_from_retailer),
                        onchange: move |evt| draft.with_mut(|d| d.bought_from_retailer = evt.checked()),
                    }
                    "Bought new from a bookstore"
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
                        "Add Book"
                    }
                }
            }
        }
    }
}
