//! Incoming exchange requests, activity stats and derived notifications.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    entities::{BookSummary, PersonRef},
    messaging::Inbox,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub id: String,
    pub status: RequestStatus,
    pub date: String,
    /// The local user's book the other side wants.
    pub wanted: BookSummary,
    pub offered: BookSummary,
    pub from: PersonRef,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ExchangeError {
    #[error("exchange request {0} not found")]
    NotFound(String),
    #[error("exchange request {id} is already {}", .status.label().to_lowercase())]
    AlreadyResolved { id: String, status: RequestStatus },
}

/// Accepts or declines a pending request in place and returns its new status.
pub fn respond(
    requests: &mut [ExchangeRequest],
    request_id: &str,
    accept: bool,
) -> Result<RequestStatus, ExchangeError> {
    let request = requests
        .iter_mut()
        .find(|r| r.id == request_id)
        .ok_or_else(|| ExchangeError::NotFound(request_id.to_string()))?;

    if request.status != RequestStatus::Pending {
        return Err(ExchangeError::AlreadyResolved {
            id: request.id.clone(),
            status: request.status,
        });
    }

    request.status = if accept {
        RequestStatus::Accepted
    } else {
        RequestStatus::Declined
    };
    Ok(request.status)
}

pub fn pending_count(requests: &[ExchangeRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .count()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivityStats {
    pub books_listed: usize,
    pub exchanges_completed: u32,
    pub pending_requests: usize,
    pub books_sold: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    UnreadMessages { conversation_id: String, count: u32 },
    PendingRequest { request_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

/// One notification per conversation with unread messages, then one per
/// pending request.
pub fn collect_notifications(inbox: &Inbox, requests: &[ExchangeRequest]) -> Vec<Notification> {
    let unread = inbox
        .conversations
        .iter()
        .filter(|c| c.unread_count > 0)
        .map(|c| Notification {
            kind: NotificationKind::UnreadMessages {
                conversation_id: c.id.clone(),
                count: c.unread_count,
            },
            text: format!(
                "{} unread message{} from {}",
                c.unread_count,
                if c.unread_count == 1 { "" } else { "s" },
                c.user_name
            ),
        });

    let pending = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Pending)
        .map(|r| Notification {
            kind: NotificationKind::PendingRequest {
                request_id: r.id.clone(),
            },
            text: format!(
                "{} offers \"{}\" for \"{}\"",
                r.from.name, r.offered.title, r.wanted.title
            ),
        });

    unread.chain(pending).collect()
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::messaging::Conversation;

    fn summary(id: &str, title: &str) -> BookSummary {
        BookSummary {
            id: id.into(),
            title: title.into(),
            author: "Author".into(),
            cover: None,
            condition: 4,
            genre: "Fiction".into(),
        }
    }

    fn request(id: &str, status: RequestStatus) -> ExchangeRequest {
        ExchangeRequest {
            id: id.into(),
            status,
            date: "2023-11-01".into(),
            wanted: summary("1", "The Great Gatsby"),
            offered: summary("8", "The Catcher in the Rye"),
            from: PersonRef {
                name: "Robert Brown".into(),
                avatar: String::new(),
            },
            message: None,
        }
    }

    #[test]
    fn pending_requests_can_be_accepted_or_declined() {
        let mut requests = vec![
            request("201", RequestStatus::Pending),
            request("202", RequestStatus::Pending),
        ];
        assert_eq!(respond(&mut requests, "201", true), Ok(RequestStatus::Accepted));
        assert_eq!(respond(&mut requests, "202", false), Ok(RequestStatus::Declined));
        assert_eq!(pending_count(&requests), 0);
    }

    #[test]
    fn resolved_or_missing_requests_are_errors() {
        let mut requests = vec![request("101", RequestStatus::Completed)];
        assert_eq!(
            respond(&mut requests, "101", true),
            Err(ExchangeError::AlreadyResolved {
                id: "101".into(),
                status: RequestStatus::Completed
            })
        );
        assert_eq!(
            respond(&mut requests, "999", true),
            Err(ExchangeError::NotFound("999".into()))
        );
        assert_eq!(
            ExchangeError::NotFound("999".into()).to_string(),
            "exchange request 999 not found"
        );
    }

    #[test]
    fn notifications_cover_unread_and_pending() {
        let inbox = Inbox::new(
            vec![Conversation {
                id: "1".into(),
                user_id: "101".into(),
                user_name: "Jane Smith".into(),
                user_avatar: String::new(),
                last_message: "hi".into(),
                last_message_at: datetime!(2024-03-01 10:00 UTC),
                unread_count: 1,
            }],
            vec![],
        );
        let requests = vec![
            request("201", RequestStatus::Pending),
            request("101", RequestStatus::Completed),
        ];
        let notifications = collect_notifications(&inbox, &requests);
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].text, "1 unread message from Jane Smith");
        assert_eq!(
            notifications[1].kind,
            NotificationKind::PendingRequest {
                request_id: "201".into()
            }
        );
    }
}
