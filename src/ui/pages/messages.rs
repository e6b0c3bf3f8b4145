use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        entities::initial,
        filter_conversations, format_message_time,
        messaging::local_now,
        AppState,
    },
    ui::theme::{self, Tone},
};

#[component]
pub fn MessagesPage(conversation_id: Option<String>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut search = use_signal(String::new);

    use_effect(use_reactive!(|conversation_id| {
        if let Some(id) = conversation_id {
            state.with_mut(|st| st.inbox.mark_read(&id));
        }
    }));

    let now = local_now();
    let conversations = state.with(|st| {
        filter_conversations(&st.inbox.conversations, &search())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "page messages",
            aside { class: "{theme::panel()} conversation-list",
                h1 { class: "{theme::heading()}", "Messages" }
                input {
                    class: "{theme::input_class()}",
                    placeholder: "Search conversations",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                if conversations.is_empty() {
                    p { class: "{theme::text_muted()}", "No conversations found." }
                }
                ul {
                    for conversation in conversations {
                        li { key: "{conversation.id}",
                            button {
                                class: if conversation_id.as_deref() == Some(conversation.id.as_str()) { "conversation conversation-active" } else { "conversation" },
                                onclick: {
                                    let id = conversation.id.clone();
                                    move |_| { nav.push(Route::Conversation { conversation_id: id.clone() }); }
                                },
                                Avatar { src: conversation.user_avatar.clone(), name: conversation.user_name.clone() }
                                div { class: "conversation-text",
                                    div { class: "inline-row",
                                        span { class: "book-title", "{conversation.user_name}" }
                                        span { class: "{theme::text_muted()}",
                                            "{format_message_time(now, conversation.last_message_at)}"
                                        }
                                    }
                                    p { class: "{theme::text_muted()} ellipsis", "{conversation.last_message}" }
                                }
                                if conversation.unread_count > 0 {
                                    span { class: "unread", "{conversation.unread_count}" }
                                }
                            }
                        }
                    }
                }
            }
            section { class: "{theme::panel()} thread",
                match conversation_id.clone() {
                    Some(id) => rsx! { Thread { key: "{id}", conversation_id: id } },
                    None => rsx! {
                        div { class: "empty-state",
                            span { class: "empty-icon", "💬" }
                            p { "Select a conversation to start messaging." }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn Thread(conversation_id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut draft = use_signal(String::new);

    let Some(conversation) = state.with(|st| st.inbox.conversation(&conversation_id).cloned()) else {
        return rsx! {
            div { class: "empty-state", p { "Conversation not found." } }
        };
    };
    let now = local_now();
    let messages = state.with(|st| {
        st.inbox
            .thread(&conversation_id)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let mut send = {
        let mut state = state.clone();
        let conversation_id = conversation_id.clone();
        move || {
            let text = draft();
            let sent = state.with_mut(|st| st.send_message(&conversation_id, &text, local_now()));
            if sent.is_some() {
                draft.set(String::new());
            }
        }
    };
    let mut send_on_enter = send.clone();

    let user_id = conversation.user_id.clone();

    rsx! {
        header { class: "thread-head",
            Avatar { src: conversation.user_avatar.clone(), name: conversation.user_name.clone() }
            h2 { class: "book-title", "{conversation.user_name}" }
            button {
                class: "{theme::btn_small(Tone::Ghost)}",
                onclick: move |_| { nav.push(Route::UserProfile { user_id: user_id.clone() }); },
                "View Profile"
            }
        }
        div { class: "thread-body",
            if messages.is_empty() {
                p { class: "{theme::text_muted()}", "No messages yet. Say hello!" }
            }
            for message in messages {
                div {
                    key: "{message.id}",
                    class: if message.is_outgoing() { "bubble bubble-out" } else { "bubble bubble-in" },
                    p { "{message.text}" }
                    span { class: "bubble-time", "{format_message_time(now, message.sent_at)}" }
                }
            }
        }
        div { class: "thread-compose",
            input {
                class: "{theme::input_class()}",
                placeholder: "Type a message…",
                value: draft(),
                oninput: move |evt| draft.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        send_on_enter();
                    }
                },
            }
            button {
                class: "{theme::btn(Tone::Primary)}",
                disabled: draft().trim().is_empty(),
                onclick: move |_| send(),
                "Send"
            }
        }
    }
}

#[component]
pub fn Avatar(src: String, name: String) -> Element {
    if src.is_empty() {
        return rsx! { span { class: "avatar avatar-fallback", "{initial(&name)}" } };
    }
    rsx! { img { class: "avatar", src: "{src}", alt: "{name}" } }
}
