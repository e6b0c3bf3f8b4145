use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{BookSummary, Listing},
    ui::{
        components::{carousel::ImageCarousel, condition_stars::ConditionStars},
        theme::{self, Tone},
    },
    util::{config::AppConfig, format_money},
};

#[component]
pub fn BookCard(listing: Listing) -> Element {
    let nav = use_navigator();
    let config = use_context::<Signal<AppConfig>>();
    let currency = config.with(|cfg| cfg.currency_symbol.clone());
    let id = listing.id.clone();
    let offer_id = listing.id.clone();
    let wants = listing.preferred_exchange_items.join(", ");
    let own = listing.is_own();

    rsx! {
        article { class: "book-card",
            ImageCarousel { images: listing.images.clone(), alt: listing.title.clone() }
            div { class: "book-card-body",
                div { class: "badges",
                    if listing.is_for_sale {
                        span { class: "{theme::badge(Tone::Primary)}", "For Sale" }
                    }
                    if listing.is_for_exchange {
                        span { class: "{theme::badge(Tone::Secondary)}", "For Exchange" }
                    }
                    span { class: "{theme::badge(Tone::Ghost)}", "{listing.genre}" }
                }
                h3 { class: "book-title", "{listing.title}" }
                p { class: "{theme::text_muted()}", "by {listing.author}" }
                ConditionStars { condition: listing.condition }
                if let Some(price) = listing.asking_price {
                    p { class: "price",
                        span { class: "price-now", "{format_money(&currency, price)}" }
                        if let Some(reference) = listing.reference_price {
                            span { class: "price-ref", "{format_money(&currency, reference)}" }
                        }
                    }
                }
                if !wants.is_empty() {
                    p { class: "wants", "Wants: {wants}" }
                }
                div { class: "owner-line",
                    img { class: "avatar-sm", src: "{listing.owner.avatar}", alt: "" }
                    span { "{listing.owner.name}" }
                }
            }
            div { class: "book-card-actions",
                button {
                    class: "{theme::btn_small(Tone::Secondary)}",
                    onclick: move |_| { nav.push(Route::BookDetail { id: id.clone() }); },
                    "Details"
                }
                if !own {
                    button {
                        class: "{theme::btn_small(Tone::Primary)}",
                        onclick: move |_| { nav.push(Route::MakeOffer { id: offer_id.clone() }); },
                        "Make Offer"
                    }
                }
            }
        }
    }
}

/// Compact row used inside exchange requests and history.
#[component]
pub fn BookSummaryTile(book: BookSummary) -> Element {
    rsx! {
        div { class: "summary-tile",
            if let Some(cover) = book.cover.as_deref() {
                img { class: "summary-cover", src: "{cover}", alt: "{book.title}" }
            } else {
                div { class: "summary-cover carousel-empty", "📖" }
            }
            div {
                p { class: "book-title", "{book.title}" }
                p { class: "{theme::text_muted()}", "{book.author}" }
                ConditionStars { condition: book.condition, show_label: false }
            }
        }
    }
}
