//! Offer construction and valuation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entities::OwnedItem;

/// What the offer is made of. Inputs outside the kind are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferKind {
    Money,
    Books,
    #[default]
    Both,
}

impl OfferKind {
    pub const ALL: [OfferKind; 3] = [OfferKind::Money, OfferKind::Books, OfferKind::Both];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Money => "Money Only",
            Self::Books => "Books Only",
            Self::Both => "Books + Money",
        }
    }

    pub fn uses_books(&self) -> bool {
        matches!(self, Self::Books | Self::Both)
    }

    pub fn uses_money(&self) -> bool {
        matches!(self, Self::Money | Self::Both)
    }
}

/// Parses user-typed cash the lenient way: the longest numeric prefix after
/// leading whitespace wins, and anything unusable becomes 0.
pub fn parse_cash(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    end
}

/// Sum of the selected items' estimated values plus the parsed cash amount.
/// Selected ids without a matching item contribute nothing.
pub fn compute_offer_total(
    owned_items: &[OwnedItem],
    selected_ids: &HashSet<String>,
    cash_text: &str,
) -> f64 {
    let books_value: f64 = owned_items
        .iter()
        .filter(|item| selected_ids.contains(&item.id))
        .map(|item| item.estimated_value)
        .sum();
    books_value + parse_cash(cash_text)
}

/// An offer is worth sending when it carries at least one book or some cash.
pub fn is_submittable(selected_ids: &HashSet<String>, cash_text: &str) -> bool {
    !selected_ids.is_empty() || parse_cash(cash_text) > 0.0
}

/// Immutable record of a submitted offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub target_listing_id: String,
    pub kind: OfferKind,
    pub offered_item_ids: Vec<String>,
    pub cash_amount: f64,
    pub message: String,
    pub total_value: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Collects the editable offer form into one value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OfferDraft {
    pub kind: OfferKind,
    pub selected_ids: HashSet<String>,
    pub cash_text: String,
    pub message: String,
}

impl OfferDraft {
    pub fn toggle(&mut self, item_id: &str) {
        if !self.selected_ids.remove(item_id) {
            self.selected_ids.insert(item_id.to_string());
        }
    }

    /// Selection after masking by kind.
    pub fn effective_selection(&self) -> HashSet<String> {
        if self.kind.uses_books() {
            self.selected_ids.clone()
        } else {
            HashSet::new()
        }
    }

    /// Cash text after masking by kind.
    pub fn effective_cash(&self) -> &str {
        if self.kind.uses_money() {
            &self.cash_text
        } else {
            ""
        }
    }

    pub fn total(&self, owned_items: &[OwnedItem]) -> f64 {
        compute_offer_total(owned_items, &self.effective_selection(), self.effective_cash())
    }

    pub fn can_submit(&self) -> bool {
        is_submittable(&self.effective_selection(), self.effective_cash())
    }

    /// Builds the offer record, or `None` when there is nothing to offer.
    pub fn build(
        &self,
        target_listing_id: &str,
        owned_items: &[OwnedItem],
        now: OffsetDateTime,
    ) -> Option<Offer> {
        if !self.can_submit() {
            return None;
        }
        let selection = self.effective_selection();
        // Keep the owner's item order rather than the set's.
        let offered_item_ids = owned_items
            .iter()
            .filter(|item| selection.contains(&item.id))
            .map(|item| item.id.clone())
            .collect();

        Some(Offer {
            target_listing_id: target_listing_id.to_string(),
            kind: self.kind,
            offered_item_ids,
            cash_amount: parse_cash(self.effective_cash()),
            message: self.message.trim().to_string(),
            total_value: self.total(owned_items),
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, value: f64) -> OwnedItem {
        OwnedItem {
            id: id.into(),
            title: format!("Book {id}"),
            author: "Someone".into(),
            condition: 4,
            genre: "Fiction".into(),
            estimated_value: value,
            description: String::new(),
            acquired_on: "2023-01-15".into(),
            images: vec![],
        }
    }

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_offer_is_worth_nothing() {
        let items = vec![item("a", 200.0)];
        assert_eq!(compute_offer_total(&items, &HashSet::new(), ""), 0.0);
    }

    #[test]
    fn sums_selected_items_and_cash() {
        let items = vec![item("a", 200.0), item("b", 180.0), item("c", 220.0)];
        assert_eq!(compute_offer_total(&items, &ids(&["a", "b"]), "20"), 400.0);
        assert_eq!(compute_offer_total(&items, &ids(&["a", "c"]), "50"), 470.0);
    }

    #[test]
    fn unknown_ids_and_garbage_cash_are_ignored() {
        let items = vec![item("a", 200.0)];
        assert_eq!(compute_offer_total(&items, &ids(&["a", "zzz"]), "abc"), 200.0);
    }

    #[test]
    fn cash_parsing_takes_numeric_prefix() {
        assert_eq!(parse_cash("12.5"), 12.5);
        assert_eq!(parse_cash("  42"), 42.0);
        assert_eq!(parse_cash("12abc"), 12.0);
        assert_eq!(parse_cash(".5"), 0.5);
        assert_eq!(parse_cash("3."), 3.0);
        assert_eq!(parse_cash("1e2"), 100.0);
        assert_eq!(parse_cash("1e"), 1.0);
        assert_eq!(parse_cash("+7"), 7.0);
    }

    #[test]
    fn cash_parsing_falls_back_to_zero() {
        for raw in ["", "   ", "abc", ".", "-", "-5", "1e999", "$20"] {
            assert_eq!(parse_cash(raw), 0.0, "{raw:?}");
        }
    }

    #[test]
    fn submittable_needs_books_or_cash() {
        assert!(!is_submittable(&HashSet::new(), ""));
        assert!(!is_submittable(&HashSet::new(), "0"));
        assert!(!is_submittable(&HashSet::new(), "abc"));
        assert!(is_submittable(&HashSet::new(), "10"));
        assert!(is_submittable(&ids(&["a"]), ""));
    }

    #[test]
    fn kind_masks_the_other_input() {
        let items = vec![item("a", 200.0), item("b", 180.0)];
        let mut draft = OfferDraft {
            kind: OfferKind::Both,
            selected_ids: ids(&["a"]),
            cash_text: "30".into(),
            message: String::new(),
        };
        assert_eq!(draft.total(&items), 230.0);

        draft.kind = OfferKind::Money;
        assert_eq!(draft.total(&items), 30.0);

        draft.kind = OfferKind::Books;
        assert_eq!(draft.total(&items), 200.0);

        draft.selected_ids.clear();
        assert!(!draft.can_submit());
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let mut draft = OfferDraft::default();
        draft.toggle("a");
        draft.toggle("b");
        draft.toggle("a");
        assert_eq!(draft.selected_ids, ids(&["b"]));
    }

    #[test]
    fn build_records_masked_inputs_in_item_order() {
        let items = vec![item("a", 200.0), item("b", 180.0)];
        let draft = OfferDraft {
            kind: OfferKind::Both,
            selected_ids: ids(&["b", "a"]),
            cash_text: "20".into(),
            message: "  interested!  ".into(),
        };
        let now = OffsetDateTime::UNIX_EPOCH;
        let offer = draft.build("listing-1", &items, now).expect("offer");
        assert_eq!(offer.offered_item_ids, vec!["a", "b"]);
        assert_eq!(offer.cash_amount, 20.0);
        assert_eq!(offer.total_value, 400.0);
        assert_eq!(offer.message, "interested!");

        assert!(OfferDraft::default().build("listing-1", &items, now).is_none());
    }
}
