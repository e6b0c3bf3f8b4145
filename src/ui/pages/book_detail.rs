use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        catalog::category_of, messaging::local_now, AppState, OfferDraft, OfferKind, OwnedItem,
    },
    ui::{
        components::{
            carousel::ImageCarousel,
            condition_stars::ConditionStars,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
    util::{config::AppConfig, format_money},
};

#[component]
pub fn BookDetailPage(id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<Signal<AppConfig>>();
    let nav = use_navigator();
    let mut show_request = use_signal(|| false);

    let Some(listing) = state.with(|st| st.listing(&id).cloned()) else {
        return rsx! { NotFound {} };
    };
    let currency = config.with(|cfg| cfg.currency_symbol.clone());
    let own = listing.is_own();
    let category = match category_of(&listing.genre) {
        Some("fiction") => "Fiction",
        Some("nonfiction") => "Non-Fiction",
        _ => "Uncategorised",
    };
    let offers_sent = state.with(|st| st.offer_count_for(&listing.id));
    let owner = listing.owner.clone();
    let rating = format!("{:.1}", owner.rating);

    let on_message = {
        let mut state = state.clone();
        let listing_id = listing.id.clone();
        move |_| {
            let opened = state.with_mut(|st| st.contact_owner(&listing_id, local_now()));
            if let Some(conversation_id) = opened {
                nav.push(Route::Conversation { conversation_id });
            }
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let listing_id = listing.id.clone();
        move |_| {
            if state.with_mut(|st| st.remove_listing(&listing_id)) {
                push_toast(toasts.clone(), ToastKind::Info, "Listing removed.");
                nav.push(Route::Profile {});
            }
        }
    };

    let on_request = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let listing_id = listing.id.clone();
        move |draft: OfferDraft| {
            let sent = state.with_mut(|st| st.submit_offer(&listing_id, &draft, local_now()));
            show_request.set(false);
            match sent {
                Some(_) => push_toast(toasts.clone(), ToastKind::Success, "Exchange request sent."),
                None => push_toast(toasts.clone(), ToastKind::Warning, "Pick at least one book to offer."),
            }
        }
    };

    let owner_id = owner.id.clone();
    let offer_id = listing.id.clone();

    rsx! {
        div { class: "page",
            button { class: "{theme::btn(Tone::Ghost)}", onclick: move |_| nav.go_back(), "← Back" }
            div { class: "detail-grid",
                ImageCarousel { images: listing.images.clone(), alt: listing.title.clone(), large: true }
                div { class: "detail-info",
                    h1 { class: "{theme::heading()}", "{listing.title}" }
                    p { class: "{theme::text_muted()}", "by {listing.author}" }
                    div { class: "badges",
                        span { class: "{theme::badge(Tone::Ghost)}", "{listing.genre}" }
                        span { class: "{theme::badge(Tone::Ghost)}", "{category}" }
                        if let Some(year) = listing.published_year {
                            span { class: "{theme::badge(Tone::Ghost)}", "Published {year}" }
                        }
                    }
                    ConditionStars { condition: listing.condition }
                    if let Some(summary) = listing.summary.as_deref() {
                        p { class: "summary", "{summary}" }
                    }
                    if let Some(price) = listing.asking_price {
                        p { class: "price",
                            span { class: "price-now", "{format_money(&currency, price)}" }
                            if let Some(reference) = listing.reference_price {
                                span { class: "price-ref", "New: {format_money(&currency, reference)}" }
                            }
                            if let Some(saving) = listing.discount() {
                                span { class: "{theme::badge(Tone::Primary)}", "Save {format_money(&currency, saving)}" }
                            }
                        }
                    }
                    if !listing.preferred_exchange_items.is_empty() {
                        div { class: "field",
                            h3 { class: "{theme::label_class()}", "Owner would like" }
                            ul { class: "wants-list",
                                for title in listing.preferred_exchange_items.iter() {
                                    li { key: "{title}", "{title}" }
                                }
                            }
                        }
                    }
                    if offers_sent > 0 {
                        p { class: "{theme::text_muted()}", "You have sent {offers_sent} offer(s) for this book." }
                    }
                    if own {
                        div { class: "action-row",
                            button { class: "{theme::btn(Tone::Danger)}", onclick: on_remove, "Remove Listing" }
                        }
                    } else {
                        div { class: "action-row",
                            button {
                                class: "{theme::btn(Tone::Primary)}",
                                onclick: move |_| { nav.push(Route::MakeOffer { id: offer_id.clone() }); },
                                "Make Offer"
                            }
                            if listing.is_for_exchange {
                                button {
                                    class: "{theme::btn(Tone::Secondary)}",
                                    onclick: move |_| show_request.set(true),
                                    "Request Exchange"
                                }
                            }
                            button { class: "{theme::btn(Tone::Ghost)}", onclick: on_message, "Message Owner" }
                        }
                    }
                    div { class: "{theme::panel()} owner-card",
                        img { class: "avatar", src: "{owner.avatar}", alt: "" }
                        div {
                            p { class: "book-title", "{owner.name}" }
                            p { class: "{theme::text_muted()}",
                                "★ {rating} · {owner.books_available} books available"
                            }
                        }
                        if !own {
                            button {
                                class: "{theme::btn_small(Tone::Ghost)}",
                                onclick: move |_| { nav.push(Route::UserProfile { user_id: owner_id.clone() }); },
                                "View Profile"
                            }
                        }
                    }
                }
            }
            if show_request() {
                ExchangeRequestDialog {
                    book_title: listing.title.clone(),
                    owned_items: state.with(|st| st.owned_items.clone()),
                    on_close: move |_| show_request.set(false),
                    on_submit: on_request,
                }
            }
        }
    }
}

/// Quick book-for-book request: pick owned books and add a note.
#[component]
fn ExchangeRequestDialog(
    book_title: String,
    owned_items: Vec<OwnedItem>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<OfferDraft>,
) -> Element {
    let mut draft = use_signal(|| OfferDraft {
        kind: OfferKind::Books,
        ..OfferDraft::default()
    });
    let can_submit = draft.with(|d| d.can_submit());

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog",
                h2 { class: "{theme::heading()}", "Request Exchange" }
                p { class: "{theme::text_muted()}", "Select the books you'd trade for \"{book_title}\"." }
                if owned_items.is_empty() {
                    p { "You have no books to offer yet." }
                }
                ul { class: "pick-list",
                    for item in owned_items {
                        li { key: "{item.id}",
                            label { class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: draft.with(|d| d.selected_ids.contains(&item.id)),
                                    onchange: {
                                        let id = item.id.clone();
                                        move |_| draft.with_mut(|d| d.toggle(&id))
                                    },
                                }
                                "{item.title} · {item.author}"
                            }
                        }
                    }
                }
                textarea {
                    class: "{theme::textarea_class()}",
                    rows: "3",
                    placeholder: "Add a message to the owner",
                    value: draft.with(|d| d.message.clone()),
                    oninput: move |evt| draft.with_mut(|d| d.message = evt.value()),
                }
                div { class: "dialog-actions",
                    button { class: "{theme::btn(Tone::Ghost)}", onclick: move |_| on_close.call(()), "Cancel" }
                    button {
                        class: "{theme::btn(Tone::Primary)}",
                        disabled: !can_submit,
                        onclick: move |_| on_submit.call(draft()),
                        "Send Request"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFound() -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "{theme::panel()} empty-state",
            p { "That book is no longer listed." }
            button {
                class: "{theme::btn(Tone::Secondary)}",
                onclick: move |_| { nav.push(Route::Browse {}); },
                "Back to browsing"
            }
        }
    }
}
