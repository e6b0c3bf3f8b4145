//! Catalog, offer and inbox logic. Nothing in here knows about the UI.

pub mod app_state;
pub mod carousel;
pub mod catalog;
pub mod drafts;
pub mod entities;
pub mod exchange;
pub mod messaging;
pub mod offer;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use catalog::{filter_listings, CatalogFilter};
#[allow(unused_imports)]
pub use drafts::{ListingDraft, OwnedItemDraft};
#[allow(unused_imports)]
pub use entities::{
    condition_label, BookSummary, Listing, Owner, OwnedItem, PersonRef, UserProfile,
    CURRENT_USER_ID,
};
#[allow(unused_imports)]
pub use exchange::{
    ActivityStats, ExchangeError, ExchangeRequest, Notification, NotificationKind, RequestStatus,
};
#[allow(unused_imports)]
pub use messaging::{filter_conversations, format_message_time, Conversation, Inbox, Message};
#[allow(unused_imports)]
pub use offer::{compute_offer_total, parse_cash, Offer, OfferDraft, OfferKind};
