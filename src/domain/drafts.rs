//! Form state for the "add a book" dialogs.

use time::{macros::format_description, Date};

use super::{
    entities::{Listing, Owner, OwnedItem},
    offer::parse_cash,
};

/// Condition preselected in new-book forms ("Very Good").
pub const DEFAULT_CONDITION: u8 = 4;

const FALLBACK_GENRE: &str = "Other";

/// Parses a `YYYY-MM-DD` date as typed into a date field.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

fn date_field_ok(raw: &str) -> bool {
    raw.trim().is_empty() || parse_iso_date(raw).is_some()
}

fn genre_or_fallback(raw: &str) -> String {
    let genre = raw.trim();
    if genre.is_empty() {
        FALLBACK_GENRE.to_string()
    } else {
        genre.to_string()
    }
}

/// Adds an image URL unless it is blank or already present.
fn push_image(images: &mut Vec<String>, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() || images.iter().any(|existing| existing == url) {
        return false;
    }
    images.push(url.to_string());
    true
}

fn remove_image(images: &mut Vec<String>, index: usize) {
    if index < images.len() {
        images.remove(index);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub author: String,
    pub images: Vec<String>,
    /// Comma separated titles the user would accept in trade.
    pub asking_books: String,
    pub asking_price: String,
    pub condition: u8,
    pub genre: String,
    pub purchase_date: String,
    pub bought_from_retailer: bool,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            images: Vec::new(),
            asking_books: String::new(),
            asking_price: String::new(),
            condition: DEFAULT_CONDITION,
            genre: String::new(),
            purchase_date: String::new(),
            bought_from_retailer: false,
        }
    }
}

impl ListingDraft {
    pub fn add_image(&mut self, url: &str) -> bool {
        push_image(&mut self.images, url)
    }

    pub fn remove_image(&mut self, index: usize) {
        remove_image(&mut self.images, index);
    }

    pub fn preferred_books(&self) -> Vec<String> {
        self.asking_books
            .split(',')
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.author.trim().is_empty()
            && !self.images.is_empty()
            && date_field_ok(&self.purchase_date)
    }

    /// Turns the form into a catalog listing, or `None` while it is incomplete.
    pub fn to_listing(&self, id: String, owner: Owner) -> Option<Listing> {
        if !self.can_submit() {
            return None;
        }
        let price = parse_cash(&self.asking_price);
        let asking_price = (price > 0.0).then_some(price);
        let preferred = self.preferred_books();
        let is_for_sale = asking_price.is_some();
        // A listing with neither a price nor wanted titles is open to any trade.
        let is_for_exchange = !preferred.is_empty() || !is_for_sale;

        Some(Listing {
            id,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: genre_or_fallback(&self.genre),
            condition: self.condition.clamp(1, 5),
            images: self.images.clone(),
            is_for_sale,
            is_for_exchange,
            asking_price,
            reference_price: None,
            preferred_exchange_items: preferred,
            summary: None,
            published_year: None,
            owner,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OwnedItemDraft {
    pub title: String,
    pub author: String,
    pub images: Vec<String>,
    pub condition: u8,
    pub genre: String,
    pub description: String,
    pub acquired_on: String,
    pub estimated_value: String,
}

impl Default for OwnedItemDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            images: Vec::new(),
            condition: 5,
            genre: String::new(),
            description: String::new(),
            acquired_on: String::new(),
            estimated_value: String::new(),
        }
    }
}

impl OwnedItemDraft {
    pub fn add_image(&mut self, url: &str) -> bool {
        push_image(&mut self.images, url)
    }

    pub fn remove_image(&mut self, index: usize) {
        remove_image(&mut self.images, index);
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.author.trim().is_empty()
            && !self.images.is_empty()
            && date_field_ok(&self.acquired_on)
    }

    pub fn to_owned_item(&self, id: String) -> Option<OwnedItem> {
        if !self.can_submit() {
            return None;
        }
        Some(OwnedItem {
            id,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            condition: self.condition.clamp(1, 5),
            genre: genre_or_fallback(&self.genre),
            estimated_value: parse_cash(&self.estimated_value),
            description: self.description.trim().to_string(),
            acquired_on: self.acquired_on.trim().to_string(),
            images: self.images.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner {
            id: "current-user".into(),
            name: "Jane Smith".into(),
            avatar: String::new(),
            rating: 5.0,
            books_available: 3,
        }
    }

    fn complete_listing_draft() -> ListingDraft {
        let mut draft = ListingDraft {
            title: " Dune ".into(),
            author: "Frank Herbert".into(),
            genre: "Science Fiction".into(),
            ..ListingDraft::default()
        };
        draft.add_image("https://example.com/dune.jpg");
        draft
    }

    #[test]
    fn listing_draft_requires_title_author_and_image() {
        let mut draft = ListingDraft::default();
        assert!(!draft.can_submit());
        draft.title = "Dune".into();
        draft.author = "Frank Herbert".into();
        assert!(!draft.can_submit());
        draft.add_image("cover.jpg");
        assert!(draft.can_submit());
        draft.purchase_date = "yesterday".into();
        assert!(!draft.can_submit());
        draft.purchase_date = "2023-06-10".into();
        assert!(draft.can_submit());
    }

    #[test]
    fn images_are_deduplicated_and_removable() {
        let mut draft = ListingDraft::default();
        assert!(draft.add_image("a.jpg"));
        assert!(!draft.add_image(" a.jpg "));
        assert!(!draft.add_image("  "));
        assert!(draft.add_image("b.jpg"));
        draft.remove_image(0);
        draft.remove_image(9);
        assert_eq!(draft.images, vec!["b.jpg"]);
    }

    #[test]
    fn listing_with_price_and_wanted_titles() {
        let mut draft = complete_listing_draft();
        draft.asking_price = "250".into();
        draft.asking_books = "Foundation, , Ender's Game ".into();
        let listing = draft.to_listing("new-1".into(), owner()).unwrap();
        assert_eq!(listing.title, "Dune");
        assert!(listing.is_for_sale);
        assert!(listing.is_for_exchange);
        assert_eq!(listing.asking_price, Some(250.0));
        assert_eq!(listing.preferred_exchange_items, vec!["Foundation", "Ender's Game"]);
        assert_eq!(listing.condition, DEFAULT_CONDITION);
    }

    #[test]
    fn listing_without_price_is_exchange_only() {
        let mut draft = complete_listing_draft();
        draft.genre = "  ".into();
        let listing = draft.to_listing("new-2".into(), owner()).unwrap();
        assert!(!listing.is_for_sale);
        assert!(listing.is_for_exchange);
        assert_eq!(listing.genre, "Other");
    }

    #[test]
    fn price_only_listing_is_sale_only() {
        let mut draft = complete_listing_draft();
        draft.asking_price = "300".into();
        let listing = draft.to_listing("new-3".into(), owner()).unwrap();
        assert!(listing.is_for_sale);
        assert!(!listing.is_for_exchange);
    }

    #[test]
    fn owned_item_draft_converts_value() {
        let mut draft = OwnedItemDraft {
            title: "Pride and Prejudice".into(),
            author: "Jane Austen".into(),
            estimated_value: "220".into(),
            acquired_on: "2023-06-10".into(),
            ..OwnedItemDraft::default()
        };
        assert!(draft.to_owned_item("x".into()).is_none());
        draft.add_image("p.jpg");
        let item = draft.to_owned_item("x".into()).unwrap();
        assert_eq!(item.estimated_value, 220.0);
        assert_eq!(item.condition, 5);

        draft.estimated_value = "lots".into();
        assert_eq!(draft.to_owned_item("y".into()).unwrap().estimated_value, 0.0);
    }

    #[test]
    fn iso_dates() {
        assert!(parse_iso_date("2023-01-15").is_some());
        assert!(parse_iso_date("2023-02-30").is_none());
        assert!(parse_iso_date("15/01/2023").is_none());
    }
}
