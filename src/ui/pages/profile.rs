use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        messaging::local_now, AppState, ExchangeRequest, ListingDraft, Owner, RequestStatus,
    },
    ui::{
        components::{
            add_book_dialog::AddBookDialog,
            book_card::{BookCard, BookSummaryTile},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        pages::messages::Avatar,
        theme::{self, Tone},
    },
    util::{config::AppConfig, format_money},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Books,
    Requests,
    History,
    Offers,
}

impl ProfileTab {
    const ALL: [ProfileTab; 4] = [Self::Books, Self::Requests, Self::History, Self::Offers];

    fn label(self) -> &'static str {
        match self {
            Self::Books => "Available Books",
            Self::Requests => "Exchange Requests",
            Self::History => "Exchange History",
            Self::Offers => "Sent Offers",
        }
    }
}

#[component]
pub fn ProfilePage(user_id: Option<String>) -> Element {
    match user_id {
        Some(id) => rsx! { OtherProfile { user_id: id } },
        None => rsx! { OwnProfile {} },
    }
}

#[component]
fn OwnProfile() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut tab = use_signal(|| ProfileTab::Books);
    let mut show_add = use_signal(|| false);

    let user = state.with(|st| st.user.clone());
    let stats = state.with(|st| st.stats());

    let on_add = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |draft: ListingDraft| {
            let added = state.with_mut(|st| st.add_listing(&draft));
            show_add.set(false);
            match added {
                Some(_) => push_toast(toasts.clone(), ToastKind::Success, "Book listed."),
                None => push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Title, author and one image are required.",
                ),
            }
        }
    };

    rsx! {
        div { class: "page",
            section { class: "{theme::panel()} profile-head",
                Avatar { src: user.avatar.clone(), name: user.name.clone() }
                div {
                    h1 { class: "{theme::heading()}", "{user.name}" }
                    p { class: "{theme::text_muted()}", "{user.location} · Joined {user.joined}" }
                    p { class: "{theme::text_muted()}", "{user.email}" }
                    p { "{user.bio}" }
                    if !user.reading_preferences.is_empty() {
                        div { class: "badges",
                            for genre in user.reading_preferences.iter() {
                                span { key: "{genre}", class: "{theme::badge(Tone::Ghost)}", "{genre}" }
                            }
                        }
                    }
                }
            }
            section { class: "kpi-grid",
                KpiCard { title: "Books Listed".to_string(), value: stats.books_listed.to_string(), icon: "📚" }
                KpiCard { title: "Exchanges".to_string(), value: stats.exchanges_completed.to_string(), icon: "🔄", description: Some("completed".to_string()) }
                KpiCard { title: "Pending Requests".to_string(), value: stats.pending_requests.to_string(), icon: "⏳" }
                KpiCard { title: "Books Sold".to_string(), value: stats.books_sold.to_string(), icon: "🏷️" }
            }
            nav { class: "tabs",
                for entry in ProfileTab::ALL {
                    button {
                        key: "{entry.label()}",
                        class: theme::tab(tab() == entry),
                        onclick: move |_| tab.set(entry),
                        "{entry.label()}"
                    }
                }
            }
            match tab() {
                ProfileTab::Books => rsx! {
                    OwnBooks { on_add_click: move |_| show_add.set(true) }
                },
                ProfileTab::Requests => rsx! { RequestList {} },
                ProfileTab::History => rsx! { HistoryList {} },
                ProfileTab::Offers => rsx! { SentOffers {} },
            }
            if show_add() {
                AddBookDialog {
                    on_close: move |_| show_add.set(false),
                    on_submit: on_add,
                }
            }
        }
    }
}

#[component]
fn OwnBooks(on_add_click: EventHandler<()>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let listings = state.with(|st| st.own_listings().into_iter().cloned().collect::<Vec<_>>());

    rsx! {
        section {
            div { class: "inline-row",
                h2 { class: "{theme::label_class()}", "My Books" }
                button {
                    class: "{theme::btn(Tone::Primary)}",
                    onclick: move |_| on_add_click.call(()),
                    "+ Add Book"
                }
            }
            if listings.is_empty() {
                p { class: "{theme::text_muted()}", "You haven't listed any books yet." }
            }
            div { class: "book-grid",
                for listing in listings {
                    BookCard { key: "{listing.id}", listing }
                }
            }
        }
    }
}

#[component]
fn RequestList() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let requests = state.with(|st| st.requests.clone());

    let respond = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |(request_id, accept): (String, bool)| {
            match state.with_mut(|st| st.respond_to_request(&request_id, accept)) {
                Ok(status) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Request {}.", status.label().to_lowercase()),
                ),
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    rsx! {
        section { class: "request-list",
            if requests.is_empty() {
                p { class: "{theme::text_muted()}", "No exchange requests yet." }
            }
            for request in requests {
                RequestCard { key: "{request.id}", request, on_respond: respond.clone() }
            }
        }
    }
}

#[component]
fn RequestCard(request: ExchangeRequest, on_respond: EventHandler<(String, bool)>) -> Element {
    let accept_id = request.id.clone();
    let decline_id = request.id.clone();

    rsx! {
        article { class: "{theme::panel()} request-card",
            header { class: "inline-row",
                div { class: "owner-line",
                    Avatar { src: request.from.avatar.clone(), name: request.from.name.clone() }
                    span { "From: {request.from.name}" }
                }
                span { class: "{theme::text_muted()}", "Date: {request.date}" }
                span { class: theme::status_badge(request.status), "{request.status.label()}" }
            }
            div { class: "swap-row",
                div {
                    p { class: "{theme::label_class()}", "Your book" }
                    BookSummaryTile { book: request.wanted.clone() }
                }
                span { class: "swap-arrow", "⇄" }
                div {
                    p { class: "{theme::label_class()}", "Offered" }
                    BookSummaryTile { book: request.offered.clone() }
                }
            }
            if let Some(message) = request.message.as_deref() {
                p { class: "request-message", "“{message}”" }
            }
            if request.status == RequestStatus::Pending {
                div { class: "action-row",
                    button {
                        class: "{theme::btn_small(Tone::Primary)}",
                        onclick: move |_| on_respond.call((accept_id.clone(), true)),
                        "Accept"
                    }
                    button {
                        class: "{theme::btn_small(Tone::Danger)}",
                        onclick: move |_| on_respond.call((decline_id.clone(), false)),
                        "Decline"
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryList() -> Element {
    let state = use_context::<Signal<AppState>>();
    let history = state.with(|st| st.history.clone());

    rsx! {
        section { class: "request-list",
            if history.is_empty() {
                p { class: "{theme::text_muted()}", "No exchange history yet." }
            }
            for exchange in history {
                article { key: "{exchange.id}", class: "{theme::panel()} request-card",
                    header { class: "inline-row",
                        span { "With {exchange.from.name}" }
                        span { class: "{theme::text_muted()}", "{exchange.date}" }
                        span { class: theme::status_badge(exchange.status), "{exchange.status.label()}" }
                    }
                    div { class: "swap-row",
                        BookSummaryTile { book: exchange.wanted.clone() }
                        span { class: "swap-arrow", "⇄" }
                        BookSummaryTile { book: exchange.offered.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SentOffers() -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = use_context::<Signal<AppConfig>>();
    let currency = config.with(|cfg| cfg.currency_symbol.clone());
    let rows = state.with(|st| {
        st.sent_offers
            .iter()
            .rev()
            .map(|offer| {
                let title = st
                    .listing(&offer.target_listing_id)
                    .map(|l| l.title.clone())
                    .unwrap_or_else(|| "Removed listing".to_string());
                (offer.clone(), title)
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        section { class: "request-list",
            if rows.is_empty() {
                p { class: "{theme::text_muted()}", "You haven't sent any offers this session." }
            }
            for (index, (offer, title)) in rows.into_iter().enumerate() {
                article { key: "{index}", class: "{theme::panel()} request-card",
                    header { class: "inline-row",
                        span { class: "book-title", "{title}" }
                        span { class: "{theme::badge(Tone::Ghost)}", "{offer.kind.label()}" }
                    }
                    p {
                        "{offer.offered_item_ids.len()} book(s) + {format_money(&currency, offer.cash_amount)} · total {format_money(&currency, offer.total_value)}"
                    }
                    if !offer.message.is_empty() {
                        p { class: "request-message", "“{offer.message}”" }
                    }
                }
            }
        }
    }
}

#[component]
fn OtherProfile(user_id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let listings = state.with(|st| {
        st.listings_by_owner(&user_id)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let owner = listings.first().map(|l| l.owner.clone()).or_else(|| {
        state.with(|st| {
            st.inbox
                .conversations
                .iter()
                .find(|c| c.user_id == user_id)
                .map(|c| Owner {
                    id: c.user_id.clone(),
                    name: c.user_name.clone(),
                    avatar: c.user_avatar.clone(),
                    rating: 0.0,
                    books_available: 0,
                })
        })
    });

    let Some(owner) = owner else {
        return rsx! {
            div { class: "{theme::panel()} empty-state",
                p { "We couldn't find that reader." }
            }
        };
    };

    let on_message = {
        let mut state = state.clone();
        let owner = owner.clone();
        move |_| {
            let conversation_id = state.with_mut(|st| {
                st.inbox
                    .open_with(&owner.id, &owner.name, &owner.avatar, local_now())
            });
            nav.push(Route::Conversation { conversation_id });
        }
    };

    let rating = format!("{:.1}", owner.rating);
    let listed = listings.len();

    rsx! {
        div { class: "page",
            button { class: "{theme::btn(Tone::Ghost)}", onclick: move |_| nav.go_back(), "← Back" }
            section { class: "{theme::panel()} profile-head",
                Avatar { src: owner.avatar.clone(), name: owner.name.clone() }
                div {
                    h1 { class: "{theme::heading()}", "{owner.name}" }
                    p { class: "{theme::text_muted()}", "★ {rating} · {listed} book(s) listed" }
                }
                button { class: "{theme::btn(Tone::Primary)}", onclick: on_message, "Message" }
            }
            h2 { class: "{theme::label_class()}", "Available Books" }
            if listings.is_empty() {
                p { class: "{theme::text_muted()}", "No books listed right now." }
            }
            div { class: "book-grid",
                for listing in listings {
                    BookCard { key: "{listing.id}", listing }
                }
            }
        }
    }
}
