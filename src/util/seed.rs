//! Decodes the bundled seed data into the initial session state.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::{
    domain::{
        entities::{Listing, OwnedItem, UserProfile},
        exchange::ExchangeRequest,
        messaging::{Conversation, Inbox, Message},
        AppState,
    },
    util::assets,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid seed data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("embedded seed data is missing")]
    MissingAsset,
    #[error("book {id} has condition {condition}, expected 1 to 5")]
    InvalidCondition { id: String, condition: u8 },
}

fn check_condition(id: &str, condition: u8) -> Result<(), SeedError> {
    if (1..=5).contains(&condition) {
        Ok(())
    } else {
        Err(SeedError::InvalidCondition {
            id: id.to_string(),
            condition,
        })
    }
}

/// Timestamps are stored relative to launch so the inbox always looks fresh.
#[derive(Debug, Deserialize)]
struct SeedConversation {
    id: String,
    user_id: String,
    user_name: String,
    user_avatar: String,
    last_message: String,
    minutes_ago: i64,
    #[serde(default)]
    unread_count: u32,
}

#[derive(Debug, Deserialize)]
struct SeedMessage {
    id: String,
    sender_id: String,
    receiver_id: String,
    text: String,
    minutes_ago: i64,
    #[serde(default)]
    read: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedData {
    user: UserProfile,
    listings: Vec<Listing>,
    #[serde(default)]
    owned_items: Vec<OwnedItem>,
    #[serde(default)]
    conversations: Vec<SeedConversation>,
    #[serde(default)]
    messages: Vec<SeedMessage>,
    #[serde(default)]
    requests: Vec<ExchangeRequest>,
    #[serde(default)]
    history: Vec<ExchangeRequest>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Every book, including the ones quoted in requests, needs a 1..=5 condition.
    fn validate(&self) -> Result<(), SeedError> {
        for listing in &self.listings {
            check_condition(&listing.id, listing.condition)?;
        }
        for item in &self.owned_items {
            check_condition(&item.id, item.condition)?;
        }
        for request in self.requests.iter().chain(&self.history) {
            check_condition(&request.wanted.id, request.wanted.condition)?;
            check_condition(&request.offered.id, request.offered.condition)?;
        }
        Ok(())
    }

    /// Resolves relative timestamps against `now` and builds the state.
    pub fn into_state(self, now: OffsetDateTime) -> AppState {
        let at = |minutes: i64| now - Duration::minutes(minutes.max(0));
        let conversations = self
            .conversations
            .into_iter()
            .map(|c| Conversation {
                id: c.id,
                user_id: c.user_id,
                user_name: c.user_name,
                user_avatar: c.user_avatar,
                last_message: c.last_message,
                last_message_at: at(c.minutes_ago),
                unread_count: c.unread_count,
            })
            .collect();
        let messages = self
            .messages
            .into_iter()
            .map(|m| Message {
                id: m.id,
                sender_id: m.sender_id,
                receiver_id: m.receiver_id,
                text: m.text,
                sent_at: at(m.minutes_ago),
                read: m.read,
            })
            .collect();

        AppState::new(
            self.user,
            self.listings,
            self.owned_items,
            Inbox::new(conversations, messages),
            self.requests,
            self.history,
        )
    }
}

pub fn load_embedded(now: OffsetDateTime) -> Result<AppState, SeedError> {
    let raw = assets::seed_json().ok_or(SeedError::MissingAsset)?;
    let seed = SeedData::from_json(raw)?;
    debug!(listings = seed.listings.len(), "decoded embedded seed data");
    Ok(seed.into_state(now))
}

pub fn load_file(path: &Path, now: OffsetDateTime) -> Result<AppState, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let seed = SeedData::from_json(&raw)?;
    info!(path = %path.display(), listings = seed.listings.len(), "loaded seed override");
    Ok(seed.into_state(now))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::{catalog::CatalogFilter, filter_listings, CURRENT_USER_ID};

    const NOW: OffsetDateTime = datetime!(2024-03-15 18:00 UTC);

    #[test]
    fn embedded_seed_decodes() {
        let state = load_embedded(NOW).expect("embedded seed");
        assert_eq!(state.user.name, "Jane Smith");
        assert_eq!(state.owned_items.len(), 3);
        assert_eq!(state.requests.len(), 2);
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.own_listings().len(), 3);
        assert_eq!(
            filter_listings(&state.listings, &CatalogFilter::default()).len(),
            state.listings.len()
        );
        assert!(state
            .listings
            .iter()
            .all(|l| (1..=5).contains(&l.condition)));
    }

    #[test]
    fn relative_minutes_become_timestamps() {
        let state = load_embedded(NOW).expect("embedded seed");
        let first = state.inbox.conversation("1").expect("conversation 1");
        assert_eq!(first.last_message_at, NOW - Duration::minutes(5));
        assert_eq!(first.unread_count, 2);
        let thread = state.inbox.thread("1");
        assert_eq!(thread.len(), 4);
        assert!(thread.iter().any(|m| m.sender_id == CURRENT_USER_ID));
    }

    #[test]
    fn bad_json_is_a_decode_error() {
        let err = SeedData::from_json("{\"user\": 3}").unwrap_err();
        assert!(matches!(err, SeedError::Decode(_)));
    }

    #[test]
    fn out_of_range_condition_is_rejected() {
        let raw = r#"{
            "user": {
                "id": "1", "name": "Jane Smith", "avatar": "", "email": "",
                "location": "", "bio": "", "joined": "",
                "exchanges_completed": 0, "books_sold": 0, "reading_preferences": []
            },
            "listings": [{
                "id": "x1", "title": "Dune", "author": "Frank Herbert", "genre": "Science Fiction",
                "condition": 9, "images": [], "is_for_sale": false, "is_for_exchange": true,
                "asking_price": null, "reference_price": null, "preferred_exchange_items": [],
                "owner": { "id": "u1", "name": "Alex", "avatar": "", "rating": 4.0, "books_available": 1 }
            }]
        }"#;
        let path = std::env::temp_dir().join(format!("book_swap_seed_{}.json", std::process::id()));
        fs::write(&path, raw).unwrap();
        let err = load_file(&path, NOW).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(
            err,
            SeedError::InvalidCondition { ref id, condition: 9 } if id == "x1"
        ));

        let fixed = raw.replace("\"condition\": 9", "\"condition\": 5");
        let state = SeedData::from_json(&fixed).unwrap().into_state(NOW);
        assert_eq!(state.listings[0].condition, 5);
    }

    #[test]
    fn missing_override_file_reports_path() {
        let err = load_file(Path::new("/definitely/not/here.json"), NOW).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
