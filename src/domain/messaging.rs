//! In-memory inbox: conversations, threads and message timestamps.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entities::CURRENT_USER_ID;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub last_message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub last_message_at: OffsetDateTime,
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
    #[serde(default)]
    pub read: bool,
}

/// First `{prefix}{n}` not already taken, counting up from `start`.
fn fresh_id(prefix: &str, start: usize, taken: impl Fn(&str) -> bool) -> String {
    (start..)
        .map(|n| format!("{prefix}{n}"))
        .find(|id| !taken(id))
        .unwrap_or_else(|| prefix.to_string())
}

impl Message {
    pub fn is_outgoing(&self) -> bool {
        self.sender_id == CURRENT_USER_ID
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inbox {
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
}

impl Inbox {
    pub fn new(conversations: Vec<Conversation>, messages: Vec<Message>) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == conversation_id)
    }

    /// Messages between the local user and the conversation partner, oldest first.
    pub fn thread(&self, conversation_id: &str) -> Vec<&Message> {
        let Some(conversation) = self.conversation(conversation_id) else {
            return Vec::new();
        };
        let partner = conversation.user_id.as_str();
        self.messages
            .iter()
            .filter(|m| {
                (m.sender_id == CURRENT_USER_ID && m.receiver_id == partner)
                    || (m.receiver_id == CURRENT_USER_ID && m.sender_id == partner)
            })
            .collect()
    }

    /// Appends an outgoing message. Blank text or an unknown conversation is a no-op.
    pub fn send(
        &mut self,
        conversation_id: &str,
        text: &str,
        now: OffsetDateTime,
    ) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = fresh_id("m", self.messages.len() + 1, |id| {
            self.messages.iter().any(|m| m.id == id)
        });
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)?;

        let message = Message {
            id,
            sender_id: CURRENT_USER_ID.to_string(),
            receiver_id: conversation.user_id.clone(),
            text: text.to_string(),
            sent_at: now,
            read: false,
        };
        conversation.last_message = message.text.clone();
        conversation.last_message_at = now;
        conversation.unread_count = 0;
        self.messages.push(message.clone());
        Some(message)
    }

    /// Marks the partner's messages as read and clears the unread badge.
    pub fn mark_read(&mut self, conversation_id: &str) {
        let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        else {
            return;
        };
        conversation.unread_count = 0;
        let partner = conversation.user_id.clone();
        for message in self
            .messages
            .iter_mut()
            .filter(|m| m.sender_id == partner && m.receiver_id == CURRENT_USER_ID)
        {
            message.read = true;
        }
    }

    /// Existing conversation with `user_id`, or a fresh empty one placed first.
    pub fn open_with(
        &mut self,
        user_id: &str,
        user_name: &str,
        user_avatar: &str,
        now: OffsetDateTime,
    ) -> String {
        if let Some(existing) = self.conversations.iter().find(|c| c.user_id == user_id) {
            return existing.id.clone();
        }
        let id = fresh_id("c", self.conversations.len() + 1, |id| {
            self.conversations.iter().any(|c| c.id == id)
        });
        self.conversations.insert(
            0,
            Conversation {
                id: id.clone(),
                user_id: user_id.to_string(),
                user_name: user_name.to_string(),
                user_avatar: user_avatar.to_string(),
                last_message: String::new(),
                last_message_at: now,
                unread_count: 0,
            },
        );
        id
    }

    pub fn unread_total(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }
}

/// Conversations whose partner name contains `search`, ignoring case.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    search: &str,
) -> Vec<&'a Conversation> {
    let needle = search.to_lowercase();
    conversations
        .iter()
        .filter(|c| c.user_name.to_lowercase().contains(&needle))
        .collect()
}

/// Inbox-style timestamp: clock time today, then "Yesterday", weekday, date.
pub fn format_message_time(now: OffsetDateTime, at: OffsetDateTime) -> String {
    let days = (now - at).whole_days().max(0);
    match days {
        0 => format!("{:02}:{:02}", at.hour(), at.minute()),
        1 => "Yesterday".to_string(),
        2..=6 => short_name(&at.weekday().to_string()),
        _ => format!("{} {}", short_name(&at.month().to_string()), at.day()),
    }
}

fn short_name(full: &str) -> String {
    full.chars().take(3).collect()
}

/// Local wall-clock time, falling back to UTC when the offset is unknown.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration};

    use super::*;

    fn conversation(id: &str, user_id: &str, name: &str, unread: u32) -> Conversation {
        Conversation {
            id: id.into(),
            user_id: user_id.into(),
            user_name: name.into(),
            user_avatar: String::new(),
            last_message: "hello".into(),
            last_message_at: datetime!(2024-03-01 10:00 UTC),
            unread_count: unread,
        }
    }

    fn incoming(id: &str, from: &str, read: bool) -> Message {
        Message {
            id: id.into(),
            sender_id: from.into(),
            receiver_id: CURRENT_USER_ID.into(),
            text: "hi".into(),
            sent_at: datetime!(2024-03-01 09:00 UTC),
            read,
        }
    }

    fn sample_inbox() -> Inbox {
        Inbox::new(
            vec![
                conversation("1", "101", "Jane Smith", 2),
                conversation("2", "102", "John Doe", 0),
            ],
            vec![
                incoming("m1", "101", true),
                incoming("m2", "102", true),
                incoming("m3", "101", false),
            ],
        )
    }

    #[test]
    fn thread_only_contains_partner_messages() {
        let inbox = sample_inbox();
        let ids: Vec<_> = inbox.thread("1").iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m3"]);
        assert!(inbox.thread("missing").is_empty());
    }

    #[test]
    fn send_appends_and_updates_conversation() {
        let mut inbox = sample_inbox();
        let now = datetime!(2024-03-02 12:30 UTC);
        let sent = inbox.send("1", "  Deal!  ", now).expect("message");
        assert_eq!(sent.id, "m4");
        assert_eq!(sent.text, "Deal!");
        assert_eq!(sent.receiver_id, "101");
        assert!(sent.is_outgoing());

        let conversation = inbox.conversation("1").unwrap();
        assert_eq!(conversation.last_message, "Deal!");
        assert_eq!(conversation.last_message_at, now);
        assert_eq!(conversation.unread_count, 0);
        assert_eq!(inbox.thread("1").len(), 3);
    }

    #[test]
    fn send_ignores_blank_text_and_unknown_conversation() {
        let mut inbox = sample_inbox();
        let now = datetime!(2024-03-02 12:30 UTC);
        assert!(inbox.send("1", "   \n", now).is_none());
        assert!(inbox.send("nope", "hello", now).is_none());
        assert_eq!(inbox.messages.len(), 3);
    }

    #[test]
    fn mark_read_clears_badge() {
        let mut inbox = sample_inbox();
        assert_eq!(inbox.unread_total(), 2);
        inbox.mark_read("1");
        assert_eq!(inbox.unread_total(), 0);
        assert!(inbox.thread("1").iter().all(|m| m.read));
    }

    #[test]
    fn open_with_reuses_or_creates() {
        let mut inbox = sample_inbox();
        let now = datetime!(2024-03-02 12:30 UTC);
        assert_eq!(inbox.open_with("102", "John Doe", "", now), "2");
        let created = inbox.open_with("200", "Sam Wilson", "", now);
        assert_eq!(created, "c3");
        assert_eq!(inbox.conversations[0].user_name, "Sam Wilson");
        assert_eq!(inbox.open_with("200", "Sam Wilson", "", now), created);
    }

    #[test]
    fn new_ids_skip_ones_already_in_use() {
        let mut inbox = sample_inbox();
        inbox.messages[0].id = "m4".into();
        inbox.conversations[1].id = "c3".into();
        let now = datetime!(2024-03-02 12:30 UTC);

        let sent = inbox.send("1", "hello", now).expect("message");
        assert_eq!(sent.id, "m5");
        let again = inbox.send("1", "still there?", now).expect("message");
        assert_eq!(again.id, "m6");
        assert_eq!(inbox.open_with("200", "Sam Wilson", "", now), "c4");
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let message = incoming("m1", "101", false);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["sent_at"], "2024-03-01T09:00:00Z");
        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn conversation_search_ignores_case() {
        let inbox = sample_inbox();
        let hits = filter_conversations(&inbox.conversations, "JANE");
        assert_eq!(hits.len(), 1);
        assert_eq!(filter_conversations(&inbox.conversations, "").len(), 2);
    }

    #[test]
    fn timestamps_bucket_by_elapsed_days() {
        let now = datetime!(2024-03-15 18:00 UTC);
        assert_eq!(format_message_time(now, now - Duration::minutes(5)), "17:55");
        assert_eq!(format_message_time(now, now - Duration::hours(30)), "Yesterday");
        // 2024-03-12 was a Tuesday.
        assert_eq!(format_message_time(now, datetime!(2024-03-12 09:00 UTC)), "Tue");
        assert_eq!(format_message_time(now, datetime!(2024-02-02 09:00 UTC)), "Feb 2");
        assert_eq!(format_message_time(now, now + Duration::hours(2)), "20:00");
    }
}
