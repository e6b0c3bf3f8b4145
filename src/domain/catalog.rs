//! Catalog filtering: search text, genre, condition and category tab.

use serde::{Deserialize, Serialize};

use super::entities::Listing;

/// Sentinel accepted by every filter dimension.
pub const ALL: &str = "all";

const FICTION_GENRES: &[&str] = &[
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Romance",
    "Thriller",
    "Psychological Thriller",
    "Classic Literature",
    "Young Adult Fantasy",
    "Historical Fiction",
    "Dystopian Fiction",
    "Adventure Thriller",
    "Crime Thriller",
    "Young Adult Dystopian",
    "Epic Fantasy",
    "Coming-of-Age",
    "Young Adult Romance",
    "Literary Fiction",
    "Contemporary Fiction",
    "Historical Romance",
    "Contemporary Romance",
    "Cozy Mystery",
    "Mythology",
    "Classic Science Fiction",
    "Contemporary Literature",
];

const NONFICTION_GENRES: &[&str] = &[
    "Biography",
    "History",
    "Self-Help",
    "Non-Fiction",
    "Memoir",
    "Philosophy",
    "Spirituality",
    "Psychology",
    "Business",
];

/// Category tab key -> member genres. A genre belongs to at most one category.
pub const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    ("fiction", FICTION_GENRES),
    ("nonfiction", NONFICTION_GENRES),
];

/// Tabs shown above the grid, as `(key, label)`.
pub const CATEGORY_TABS: &[(&str, &str)] = &[
    (ALL, "All Books"),
    ("fiction", "Fiction"),
    ("nonfiction", "Non-Fiction"),
];

/// Genres offered in the genre dropdown, in display order.
pub const GENRE_CHOICES: &[&str] = &[
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Romance",
    "Biography",
    "History",
    "Self-Help",
    "Non-Fiction",
    "Thriller",
    "Psychological Thriller",
    "Memoir",
    "Classic Literature",
    "Philosophy",
    "Young Adult Fantasy",
    "Historical Fiction",
    "Dystopian Fiction",
    "Adventure Thriller",
    "Crime Thriller",
    "Spirituality",
    "Young Adult Dystopian",
    "Epic Fantasy",
    "Coming-of-Age",
    "Psychology",
    "Young Adult Romance",
    "Business",
    "Literary Fiction",
    "Contemporary Fiction",
    "Historical Romance",
    "Contemporary Romance",
    "Cozy Mystery",
    "Mythology",
    "Classic Science Fiction",
    "Contemporary Literature",
];

/// Condition values accepted by the condition filter.
pub const CONDITION_CHOICES: &[&str] = &["5", "4", "3", "2", "1"];

pub fn genres_for(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_TABLE
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, genres)| *genres)
}

pub fn category_of(genre: &str) -> Option<&'static str> {
    CATEGORY_TABLE
        .iter()
        .find(|(_, genres)| genres.contains(&genre))
        .map(|(key, _)| *key)
}

/// The four filter inputs as the browse page holds them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub search_text: String,
    pub genre: String,
    pub condition: String,
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            genre: ALL.to_string(),
            condition: ALL.to_string(),
            category: ALL.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.matches_genre(listing)
            && self.matches_condition(listing)
            && self.matches_category(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        listing.title.to_lowercase().contains(&needle)
            || listing.author.to_lowercase().contains(&needle)
    }

    fn matches_genre(&self, listing: &Listing) -> bool {
        self.genre == ALL || listing.genre == self.genre
    }

    fn matches_condition(&self, listing: &Listing) -> bool {
        if self.condition == ALL {
            return true;
        }
        // Only the literal strings "1".."5" count; anything else matches nothing.
        match parse_condition(&self.condition) {
            Some(wanted) => listing.condition == wanted,
            None => false,
        }
    }

    fn matches_category(&self, listing: &Listing) -> bool {
        if self.category == ALL {
            return true;
        }
        genres_for(&self.category)
            .map(|genres| genres.contains(&listing.genre.as_str()))
            .unwrap_or(false)
    }
}

fn parse_condition(raw: &str) -> Option<u8> {
    CONDITION_CHOICES
        .contains(&raw)
        .then(|| raw.parse::<u8>().ok())
        .flatten()
}

/// Returns the listings matching every criterion of `filter`, in input order.
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &CatalogFilter) -> Vec<&'a Listing> {
    listings.iter().filter(|listing| filter.matches(listing)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Owner;

    fn book(id: &str, title: &str, author: &str, genre: &str, condition: u8) -> Listing {
        Listing {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            condition,
            images: vec![],
            is_for_sale: false,
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
        }
    }

    fn dune_and_1984() -> Vec<Listing> {
        vec![
            book("1", "Dune", "Frank Herbert", "Science Fiction", 4),
            book("2", "1984", "George Orwell", "Fiction", 5),
        ]
    }

    fn ids(result: &[&Listing]) -> Vec<String> {
        result.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn identity_filter_keeps_everything() {
        let listings = dune_and_1984();
        let result = filter_listings(&listings, &CatalogFilter::default());
        assert_eq!(ids(&result), vec!["1", "2"]);
        assert!(CatalogFilter::default().is_identity());
    }

    #[test]
    fn any_narrowing_field_clears_identity() {
        let narrowed = [
            CatalogFilter { search_text: "x".into(), ..CatalogFilter::default() },
            CatalogFilter { genre: "Fantasy".into(), ..CatalogFilter::default() },
            CatalogFilter { condition: "3".into(), ..CatalogFilter::default() },
            CatalogFilter { category: "fiction".into(), ..CatalogFilter::default() },
        ];
        for filter in narrowed {
            assert!(!filter.is_identity(), "{filter:?}");
        }
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let listings = dune_and_1984();
        let filter = CatalogFilter {
            search_text: "dune".into(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &filter)), vec!["1"]);
    }

    #[test]
    fn search_matches_author() {
        let listings = dune_and_1984();
        let filter = CatalogFilter {
            search_text: "ORWELL".into(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &filter)), vec!["2"]);
    }

    #[test]
    fn condition_filter_is_exact() {
        let listings = dune_and_1984();
        let filter = CatalogFilter {
            condition: "5".into(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &filter)), vec!["2"]);
    }

    #[test]
    fn unparseable_condition_matches_nothing() {
        let listings = dune_and_1984();
        for raw in ["Very Good", "6", "0", " 4", "4.0", ""] {
            let filter = CatalogFilter {
                condition: raw.into(),
                ..CatalogFilter::default()
            };
            assert!(filter_listings(&listings, &filter).is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn genre_filter_is_case_sensitive() {
        let listings = dune_and_1984();
        let exact = CatalogFilter {
            genre: "Science Fiction".into(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &exact)), vec!["1"]);

        let lower = CatalogFilter {
            genre: "science fiction".into(),
            ..CatalogFilter::default()
        };
        assert!(filter_listings(&listings, &lower).is_empty());
    }

    #[test]
    fn category_uses_membership_table() {
        let listings = vec![
            book("1", "Dune", "Frank Herbert", "Science Fiction", 4),
            book("2", "Sapiens", "Yuval Noah Harari", "Non-Fiction", 5),
            // "Fiction" itself is in neither list.
            book("3", "1984", "George Orwell", "Fiction", 5),
        ];
        let fiction = CatalogFilter {
            category: "fiction".into(),
            ..CatalogFilter::default()
        };
        let nonfiction = CatalogFilter {
            category: "nonfiction".into(),
            ..CatalogFilter::default()
        };
        let unknown = CatalogFilter {
            category: "recent".into(),
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&filter_listings(&listings, &fiction)), vec!["1"]);
        assert_eq!(ids(&filter_listings(&listings, &nonfiction)), vec!["2"]);
        assert!(filter_listings(&listings, &unknown).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let listings = vec![
            book("1", "The Hobbit", "J.R.R. Tolkien", "Fantasy", 4),
            book("2", "The Silmarillion", "J.R.R. Tolkien", "Epic Fantasy", 3),
            book("3", "Becoming", "Michelle Obama", "Biography", 4),
        ];
        let filter = CatalogFilter {
            search_text: "tolkien".into(),
            genre: ALL.into(),
            condition: "4".into(),
            category: "fiction".into(),
        };
        assert_eq!(ids(&filter_listings(&listings, &filter)), vec!["1"]);
    }

    #[test]
    fn category_lookup_helpers() {
        assert_eq!(category_of("Memoir"), Some("nonfiction"));
        assert_eq!(category_of("Cozy Mystery"), Some("fiction"));
        assert_eq!(category_of("Cookbook"), None);
        assert!(genres_for("fiction").unwrap().contains(&"Mythology"));
        assert!(genres_for(ALL).is_none());
    }

    #[test]
    fn every_genre_choice_belongs_to_one_category() {
        for genre in GENRE_CHOICES {
            let hits = CATEGORY_TABLE
                .iter()
                .filter(|(_, genres)| genres.contains(genre))
                .count();
            assert_eq!(hits, 1, "{genre}");
        }
    }
}
