use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    catalog::CatalogFilter,
    drafts::{ListingDraft, OwnedItemDraft},
    entities::{Listing, OwnedItem, UserProfile, CURRENT_USER_ID},
    exchange::{
        collect_notifications, pending_count, respond, ActivityStats, ExchangeError,
        ExchangeRequest, Notification, RequestStatus,
    },
    messaging::{Inbox, Message},
    offer::{Offer, OfferDraft},
};

/// Everything the session knows. Lives only as long as the window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub user: UserProfile,
    pub listings: Vec<Listing>,
    /// Books the local user can put into offers.
    pub owned_items: Vec<OwnedItem>,
    pub inbox: Inbox,
    pub requests: Vec<ExchangeRequest>,
    pub history: Vec<ExchangeRequest>,
    pub sent_offers: Vec<Offer>,
    /// Browse filters, kept across navigation.
    pub filter: CatalogFilter,
}

impl AppState {
    pub fn new(
        user: UserProfile,
        listings: Vec<Listing>,
        owned_items: Vec<OwnedItem>,
        inbox: Inbox,
        requests: Vec<ExchangeRequest>,
        history: Vec<ExchangeRequest>,
    ) -> Self {
        Self {
            user,
            listings,
            owned_items,
            inbox,
            requests,
            history,
            sent_offers: Vec::new(),
            filter: CatalogFilter::default(),
        }
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn listings_by_owner(&self, owner_id: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.is_owned_by(owner_id))
            .collect()
    }

    pub fn own_listings(&self) -> Vec<&Listing> {
        self.listings_by_owner(CURRENT_USER_ID)
    }

    /// Publishes a new listing owned by the local user; returns its id.
    pub fn add_listing(&mut self, draft: &ListingDraft) -> Option<String> {
        let id = Uuid::new_v4().to_string();
        let owner = self.user.as_owner(self.own_listings().len() as u32 + 1);
        let Some(listing) = draft.to_listing(id.clone(), owner) else {
            warn!(title = %draft.title, "rejected incomplete listing draft");
            return None;
        };
        info!(
            listing_id = %id,
            title = %listing.title,
            for_sale = listing.is_for_sale,
            for_exchange = listing.is_for_exchange,
            purchase_date = %draft.purchase_date,
            bought_from_retailer = draft.bought_from_retailer,
            "listing added"
        );
        self.listings.insert(0, listing);
        Some(id)
    }

    /// Removes one of the local user's listings. Other owners' books stay.
    pub fn remove_listing(&mut self, id: &str) -> bool {
        let before = self.listings.len();
        self.listings
            .retain(|l| !(l.id == id && l.is_owned_by(CURRENT_USER_ID)));
        let removed = self.listings.len() != before;
        if removed {
            info!(listing_id = %id, "listing removed");
        }
        removed
    }

    pub fn add_owned_item(&mut self, draft: &OwnedItemDraft) -> Option<String> {
        let id = Uuid::new_v4().to_string();
        let item = draft.to_owned_item(id.clone())?;
        info!(
            item_id = %id,
            title = %item.title,
            estimated_value = item.estimated_value,
            "owned book added"
        );
        self.owned_items.push(item);
        Some(id)
    }

    /// Records an offer on a listing. Nothing is sent anywhere.
    pub fn submit_offer(
        &mut self,
        listing_id: &str,
        draft: &OfferDraft,
        now: OffsetDateTime,
    ) -> Option<Offer> {
        if self.listing(listing_id).is_none() {
            warn!(listing_id, "offer for unknown listing ignored");
            return None;
        }
        let offer = draft.build(listing_id, &self.owned_items, now)?;
        info!(
            listing_id,
            kind = ?offer.kind,
            items = ?offer.offered_item_ids,
            cash = offer.cash_amount,
            total = offer.total_value,
            "offer submitted"
        );
        self.sent_offers.push(offer.clone());
        Some(offer)
    }

    pub fn send_message(
        &mut self,
        conversation_id: &str,
        text: &str,
        now: OffsetDateTime,
    ) -> Option<Message> {
        let message = self.inbox.send(conversation_id, text, now)?;
        debug!(conversation_id, message_id = %message.id, "message sent");
        Some(message)
    }

    /// Opens (or creates) the conversation with a listing's owner.
    pub fn contact_owner(&mut self, listing_id: &str, now: OffsetDateTime) -> Option<String> {
        let owner = self.listing(listing_id)?.owner.clone();
        if owner.id == CURRENT_USER_ID {
            return None;
        }
        Some(self.inbox.open_with(&owner.id, &owner.name, &owner.avatar, now))
    }

    pub fn respond_to_request(
        &mut self,
        request_id: &str,
        accept: bool,
    ) -> Result<RequestStatus, ExchangeError> {
        let status = respond(&mut self.requests, request_id, accept)?;
        info!(request_id, status = ?status, "exchange request answered");
        Ok(status)
    }

    pub fn stats(&self) -> ActivityStats {
        ActivityStats {
            books_listed: self.own_listings().len(),
            exchanges_completed: self.user.exchanges_completed,
            pending_requests: pending_count(&self.requests),
            books_sold: self.user.books_sold,
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        collect_notifications(&self.inbox, &self.requests)
    }

    pub fn offer_count_for(&self, listing_id: &str) -> usize {
        self.sent_offers
            .iter()
            .filter(|o| o.target_listing_id == listing_id)
            .count()
    }
}
