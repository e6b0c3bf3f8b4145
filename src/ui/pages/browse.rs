use dioxus::prelude::*;

use crate::{
    domain::{
        catalog::{ALL, CATEGORY_TABS, CONDITION_CHOICES, GENRE_CHOICES},
        condition_label, filter_listings, AppState, CatalogFilter,
    },
    ui::{
        components::book_card::BookCard,
        theme::{self, Tone},
    },
};

#[component]
pub fn BrowsePage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let filter = state.with(|st| st.filter.clone());
    let (visible, total) = state.with(|st| {
        let visible = filter_listings(&st.listings, &st.filter)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        (visible, st.listings.len())
    });
    let shown = visible.len();
    let narrowed = !filter.is_identity();

    let on_reset = move |_| state.with_mut(|st| st.filter = CatalogFilter::default());

    rsx! {
        div { class: "page",
            section { class: "page-head",
                h1 { class: "{theme::heading()}", "Available Books for Exchange" }
                p { class: "{theme::text_muted()}",
                    "Browse books available for exchange or search for specific titles"
                }
            }
            section { class: "filter-bar",
                input {
                    class: "{theme::input_class()} search",
                    placeholder: "Search by title or author",
                    value: filter.search_text.clone(),
                    oninput: move |evt| state.with_mut(|st| st.filter.search_text = evt.value()),
                }
                select {
                    class: "{theme::select_class()}",
                    value: filter.genre.clone(),
                    onchange: move |evt| state.with_mut(|st| st.filter.genre = evt.value()),
                    option { value: ALL, "All Genres" }
                    for genre in GENRE_CHOICES.iter() {
                        option { value: "{genre}", "{genre}" }
                    }
                }
                select {
                    class: "{theme::select_class()}",
                    value: filter.condition.clone(),
                    onchange: move |evt| state.with_mut(|st| st.filter.condition = evt.value()),
                    option { value: ALL, "All Conditions" }
                    for choice in CONDITION_CHOICES.iter() {
                        option {
                            value: "{choice}",
                            "{condition_label(choice.parse().unwrap_or_default())}"
                        }
                    }
                }
                if narrowed {
                    button { class: "{theme::btn_small(Tone::Ghost)}", onclick: on_reset, "Clear filters" }
                }
            }
            nav { class: "tabs",
                for (key, label) in CATEGORY_TABS.iter().copied() {
                    button {
                        key: "{key}",
                        class: theme::tab(filter.category == key),
                        onclick: move |_| state.with_mut(|st| st.filter.category = key.to_string()),
                        "{label}"
                    }
                }
            }
            p { class: "{theme::text_muted()} result-count", "Showing {shown} of {total} books" }
            if visible.is_empty() {
                div { class: "{theme::panel()} empty-state",
                    p { "No books match your filters." }
                    button { class: "{theme::btn(Tone::Secondary)}", onclick: on_reset, "Clear filters" }
                }
            } else {
                div { class: "book-grid",
                    for listing in visible {
                        BookCard { key: "{listing.id}", listing }
                    }
                }
            }
        }
    }
}
