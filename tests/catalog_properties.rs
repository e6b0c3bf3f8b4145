use std::collections::HashSet;

use book_swap::domain::{
    catalog::{CatalogFilter, ALL, CATEGORY_TABS, CONDITION_CHOICES, GENRE_CHOICES},
    compute_offer_total, filter_listings, Listing, Owner, OwnedItem,
};
use proptest::prelude::*;

fn arb_listing() -> impl Strategy<Value = Listing> {
    (
        "[a-z]{0,3}",
        "[A-Za-z ]{0,12}",
        "[A-Za-z ]{0,12}",
        prop::sample::select(GENRE_CHOICES.to_vec()),
        1u8..=5,
    )
        .prop_map(|(id, title, author, genre, condition)| Listing {
            id,
            title,
            author,
            genre: genre.to_string(),
            condition,
            images: vec![],
            is_for_sale: true,
            is_for_exchange: true,
            asking_price: None,
            reference_price: None,
            preferred_exchange_items: vec![],
            summary: None,
            published_year: None,
            owner: Owner {
                id: "owner".into(),
                name: "Owner".into(),
                avatar: String::new(),
                rating: 4.0,
                books_available: 1,
            },
        })
}

fn arb_filter() -> impl Strategy<Value = CatalogFilter> {
    let genres = std::iter::once(ALL).chain(GENRE_CHOICES.iter().copied()).collect::<Vec<_>>();
    let conditions = std::iter::once(ALL)
        .chain(CONDITION_CHOICES.iter().copied())
        .collect::<Vec<_>>();
    let categories = CATEGORY_TABS.iter().map(|(key, _)| *key).collect::<Vec<_>>();
    (
        "[a-zA-Z ]{0,3}",
        prop::sample::select(genres),
        prop::sample::select(conditions),
        prop::sample::select(categories),
    )
        .prop_map(|(search_text, genre, condition, category)| CatalogFilter {
            search_text,
            genre: genre.to_string(),
            condition: condition.to_string(),
            category: category.to_string(),
        })
}

fn owned(id: usize, value: f64) -> OwnedItem {
    OwnedItem {
        id: format!("item-{id}"),
        title: format!("Book {id}"),
        author: "Author".into(),
        condition: 4,
        genre: "Fiction".into(),
        estimated_value: value,
        description: String::new(),
        acquired_on: String::new(),
        images: vec![],
    }
}

proptest! {
    #[test]
    fn identity_filter_keeps_everything(listings in prop::collection::vec(arb_listing(), 0..20)) {
        let kept = filter_listings(&listings, &CatalogFilter::default());
        prop_assert_eq!(kept.len(), listings.len());
        for (kept, original) in kept.iter().zip(listings.iter()) {
            prop_assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn result_is_an_ordered_subsequence(
        listings in prop::collection::vec(arb_listing(), 0..20),
        filter in arb_filter(),
    ) {
        let kept = filter_listings(&listings, &filter);
        let mut cursor = 0;
        for hit in kept {
            let position = listings[cursor..]
                .iter()
                .position(|candidate| std::ptr::eq(candidate, hit));
            prop_assert!(position.is_some());
            cursor += position.unwrap_or_default() + 1;
        }
    }

    #[test]
    fn search_hits_contain_the_needle(
        listings in prop::collection::vec(arb_listing(), 0..20),
        needle in "[a-zA-Z]{1,2}",
    ) {
        let filter = CatalogFilter { search_text: needle.clone(), ..CatalogFilter::default() };
        let lowered = needle.to_lowercase();
        for hit in filter_listings(&listings, &filter) {
            prop_assert!(
                hit.title.to_lowercase().contains(&lowered)
                    || hit.author.to_lowercase().contains(&lowered)
            );
        }
    }

    #[test]
    fn empty_catalog_stays_empty(filter in arb_filter()) {
        prop_assert!(filter_listings(&[], &filter).is_empty());
    }

    #[test]
    fn total_is_selected_values_plus_cash(
        values in prop::collection::vec(0u32..1_000, 0..8),
        picks in prop::collection::vec(any::<bool>(), 8),
        cash in 0u32..10_000,
    ) {
        let items = values
            .iter()
            .enumerate()
            .map(|(index, value)| owned(index, f64::from(*value)))
            .collect::<Vec<_>>();
        let selected = items
            .iter()
            .zip(picks.iter())
            .filter(|(_, pick)| **pick)
            .map(|(item, _)| item.id.clone())
            .collect::<HashSet<_>>();
        let expected = items
            .iter()
            .filter(|item| selected.contains(&item.id))
            .map(|item| item.estimated_value)
            .sum::<f64>()
            + f64::from(cash);

        let total = compute_offer_total(&items, &selected, &cash.to_string());
        prop_assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_cash_adds_nothing(cash in "[a-zA-Z]{1,6}") {
        let items = vec![owned(1, 120.0)];
        let selected = HashSet::from(["item-1".to_string()]);
        prop_assert_eq!(compute_offer_total(&items, &selected, &cash), 120.0);
    }
}

#[test]
fn empty_offer_is_worth_nothing() {
    assert_eq!(compute_offer_total(&[], &HashSet::new(), ""), 0.0);
}

#[test]
fn unknown_selection_ids_are_ignored() {
    let items = vec![owned(1, 200.0), owned(2, 180.0)];
    let selected = HashSet::from(["item-1".to_string(), "ghost".to_string()]);
    assert_eq!(compute_offer_total(&items, &selected, "50"), 250.0);
}
