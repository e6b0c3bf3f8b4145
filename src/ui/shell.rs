use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, NotificationKind};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let mut show_notifications = use_signal(|| false);

    let notifications = state.with(|st| st.notifications());
    let unread = state.with(|st| st.inbox.unread_total());
    let bell_count = notifications.len();
    let messages_label = if unread > 0 {
        format!("Messages ({unread})")
    } else {
        "Messages".to_string()
    };

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "header-inner",
                    button {
                        class: "brand",
                        onclick: move |_| { nav.push(Route::Browse {}); },
                        span { class: "brand-icon", "📚" }
                        span { "{APP_NAME}" }
                    }
                    nav { class: "main-nav",
                        NavButton {
                            active: matches!(current_route, Route::Browse {} | Route::BookDetail { .. } | Route::MakeOffer { .. }),
                            onclick: move |_| { nav.push(Route::Browse {}); },
                            label: "Browse".to_string(),
                        }
                        NavButton {
                            active: matches!(current_route, Route::Messages {} | Route::Conversation { .. }),
                            onclick: move |_| { nav.push(Route::Messages {}); },
                            label: messages_label,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Profile {} | Route::UserProfile { .. }),
                            onclick: move |_| { nav.push(Route::Profile {}); },
                            label: "Profile".to_string(),
                        }
                    }
                    div { class: "bell",
                        button {
                            class: "bell-button",
                            title: "Notifications",
                            onclick: move |_| show_notifications.set(!show_notifications()),
                            "🔔"
                            if bell_count > 0 {
                                span { class: "bell-count", "{bell_count}" }
                            }
                        }
                        if show_notifications() {
                            div { class: "bell-menu",
                                if notifications.is_empty() {
                                    p { class: "text-muted", "You're all caught up." }
                                }
                                for notification in notifications {
                                    button {
                                        class: "bell-item",
                                        onclick: {
                                            let kind = notification.kind.clone();
                                            move |_| {
                                                show_notifications.set(false);
                                                match &kind {
                                                    NotificationKind::UnreadMessages { conversation_id, .. } => {
                                                        nav.push(Route::Conversation { conversation_id: conversation_id.clone() });
                                                    }
                                                    NotificationKind::PendingRequest { .. } => {
                                                        nav.push(Route::Profile {});
                                                    }
                                                }
                                            }
                                        },
                                        "{notification.text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: String) -> Element {
    let class = if active { "nav-button nav-active" } else { "nav-button" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
