use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        condition_label, messaging::local_now, AppState, OfferDraft, OfferKind, OwnedItemDraft,
    },
    ui::{
        components::{
            owned_item_dialog::OwnedItemDialog,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        pages::book_detail::NotFound,
        theme::{self, Tone},
    },
    util::{config::AppConfig, format_money},
};

#[component]
pub fn MakeOfferPage(id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<Signal<AppConfig>>();
    let nav = use_navigator();
    let mut draft = use_signal(OfferDraft::default);
    let mut show_add_book = use_signal(|| false);

    let Some(listing) = state.with(|st| st.listing(&id).cloned()) else {
        return rsx! { NotFound {} };
    };
    let currency = config.with(|cfg| cfg.currency_symbol.clone());

    if listing.is_own() {
        return rsx! {
            div { class: "{theme::panel()} empty-state",
                p { "This is your own listing." }
                button {
                    class: "{theme::btn(Tone::Secondary)}",
                    onclick: move |_| { nav.push(Route::Profile {}); },
                    "Go to profile"
                }
            }
        };
    }

    let owned_items = state.with(|st| st.owned_items.clone());
    let current = draft();
    let total = current.total(&owned_items);
    let can_submit = current.can_submit();

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let listing_id = listing.id.clone();
        let currency = currency.clone();
        move |_| {
            let offer = state.with_mut(|st| st.submit_offer(&listing_id, &draft(), local_now()));
            match offer {
                Some(offer) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        format!(
                            "Offer sent, total value {}.",
                            format_money(&currency, offer.total_value)
                        ),
                    );
                    draft.set(OfferDraft::default());
                    nav.push(Route::BookDetail { id: listing_id.clone() });
                }
                None => push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Add a book or an amount before sending.",
                ),
            }
        }
    };

    let on_add_book = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |book: OwnedItemDraft| {
            let added = state.with_mut(|st| st.add_owned_item(&book));
            show_add_book.set(false);
            if let Some(item_id) = added {
                draft.with_mut(|d| d.toggle(&item_id));
                push_toast(toasts.clone(), ToastKind::Success, "Book added to your offer.");
            }
        }
    };

    rsx! {
        div { class: "page",
            button { class: "{theme::btn(Tone::Ghost)}", onclick: move |_| nav.go_back(), "← Back" }
            h1 { class: "{theme::heading()}", "Make an Offer" }
            div { class: "offer-grid",
                section { class: "{theme::panel()} offer-target",
                    if let Some(cover) = listing.cover() {
                        img { class: "summary-cover", src: "{cover}", alt: "{listing.title}" }
                    }
                    h2 { class: "book-title", "{listing.title}" }
                    p { class: "{theme::text_muted()}", "by {listing.author}" }
                    p { "Condition: {condition_label(listing.condition)}" }
                    if let Some(price) = listing.asking_price {
                        p { class: "price",
                            span { class: "price-now", "Asking {format_money(&currency, price)}" }
                            if let Some(reference) = listing.reference_price {
                                span { class: "price-ref", "{format_money(&currency, reference)}" }
                            }
                        }
                    }
                }
                section { class: "{theme::panel()} offer-form",
                    nav { class: "tabs",
                        for kind in OfferKind::ALL {
                            button {
                                key: "{kind.label()}",
                                class: theme::tab(current.kind == kind),
                                onclick: move |_| draft.with_mut(|d| d.kind = kind),
                                "{kind.label()}"
                            }
                        }
                    }
                    if current.kind.uses_money() {
                        div { class: "field",
                            label { class: "{theme::label_class()}",
                                if current.kind.uses_books() { "Additional money ({currency})" } else { "Offer amount ({currency})" }
                            }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "number",
                                min: "0",
                                value: current.cash_text.clone(),
                                oninput: move |evt| draft.with_mut(|d| d.cash_text = evt.value()),
                            }
                        }
                    }
                    if current.kind.uses_books() {
                        div { class: "field",
                            div { class: "inline-row",
                                h3 { class: "{theme::label_class()}", "Your books" }
                                button {
                                    class: "{theme::btn_small(Tone::Secondary)}",
                                    onclick: move |_| show_add_book.set(true),
                                    "+ Add a book"
                                }
                            }
                            ul { class: "pick-list",
                                for item in owned_items.iter().cloned() {
                                    li { key: "{item.id}",
                                        label { class: "checkbox",
                                            input {
                                                r#type: "checkbox",
                                                checked: current.selected_ids.contains(&item.id),
                                                onchange: {
                                                    let id = item.id.clone();
                                                    move |_| draft.with_mut(|d| d.toggle(&id))
                                                },
                                            }
                                            span { class: "pick-title", "{item.title}" }
                                            span { class: "{theme::text_muted()}",
                                                "{condition_label(item.condition)} · Est. value {format_money(&currency, item.estimated_value)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "{theme::label_class()}", "Message" }
                        textarea {
                            class: "{theme::textarea_class()}",
                            rows: "3",
                            placeholder: "Tell the owner about your offer",
                            value: current.message.clone(),
                            oninput: move |evt| draft.with_mut(|d| d.message = evt.value()),
                        }
                    }
                    div { class: "offer-total",
                        span { "Total offer value" }
                        strong { "{format_money(&currency, total)}" }
                    }
                    button {
                        class: "{theme::btn(Tone::Primary)}",
                        disabled: !can_submit,
                        onclick: on_submit,
                        "Send Offer"
                    }
                }
            }
            if show_add_book() {
                OwnedItemDialog {
                    on_close: move |_| show_add_book.set(false),
                    on_submit: on_add_book,
                }
            }
        }
    }
}
