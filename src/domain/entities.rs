use serde::{Deserialize, Serialize};

/// Identifier the local user carries in messages and listings.
pub const CURRENT_USER_ID: &str = "current-user";

/// Public information about whoever owns a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub books_available: u32,
}

/// One book in the catalog, offered for sale and/or exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// 1..=5, 5 is best.
    pub condition: u8,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_for_sale: bool,
    #[serde(default)]
    pub is_for_exchange: bool,
    #[serde(default)]
    pub asking_price: Option<f64>,
    /// Price of a new copy, shown for comparison.
    #[serde(default)]
    pub reference_price: Option<f64>,
    /// Titles the owner would take in trade. Display only.
    #[serde(default)]
    pub preferred_exchange_items: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub published_year: Option<u16>,
    pub owner: Owner,
}

impl Listing {
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.id == user_id
    }

    /// The local user's own books take no offers.
    pub fn is_own(&self) -> bool {
        self.is_owned_by(CURRENT_USER_ID)
    }

    /// Savings against the reference price, when both prices are known.
    pub fn discount(&self) -> Option<f64> {
        match (self.asking_price, self.reference_price) {
            (Some(asking), Some(reference)) if reference > asking => Some(reference - asking),
            _ => None,
        }
    }
}

/// A book the local user owns and may put into an offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub condition: u8,
    pub genre: String,
    pub estimated_value: f64,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`, as typed by the user.
    #[serde(default)]
    pub acquired_on: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Lightweight book reference used inside exchange requests and history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub cover: Option<String>,
    pub condition: u8,
    pub genre: String,
}

impl From<&Listing> for BookSummary {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            author: listing.author.clone(),
            cover: listing.cover().map(str::to_string),
            condition: listing.condition,
            genre: listing.genre.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub joined: String,
    pub exchanges_completed: u32,
    #[serde(default)]
    pub books_sold: u32,
    #[serde(default)]
    pub reading_preferences: Vec<String>,
}

impl UserProfile {
    /// Owner card used when the local user publishes a listing.
    pub fn as_owner(&self, books_available: u32) -> Owner {
        Owner {
            id: CURRENT_USER_ID.to_string(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            rating: 5.0,
            books_available,
        }
    }
}

/// Human label for a 1..=5 condition grade.
pub fn condition_label(condition: u8) -> &'static str {
    match condition {
        5 => "Like New",
        4 => "Very Good",
        3 => "Good",
        2 => "Fair",
        1 => "Poor",
        _ => "Unknown",
    }
}

/// First character of a display name, for avatar fallbacks.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
