use dioxus::prelude::*;
use tracing::{error, warn};

use crate::{
    domain::{messaging::local_now, AppState},
    ui::{
        components::toast::{Toast, ToastKind, ToastMessage},
        pages::{BookDetailPage, BrowsePage, MakeOfferPage, MessagesPage, ProfilePage},
        shell::Shell,
    },
    util::{
        assets,
        config::{self, AppConfig},
        seed,
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Browse {},
    #[route("/book/:id")]
    BookDetail { id: String },
    #[route("/offer/:id")]
    MakeOffer { id: String },
    #[route("/messages")]
    Messages {},
    #[route("/messages/:conversation_id")]
    Conversation { conversation_id: String },
    #[route("/profile")]
    Profile {},
    #[route("/profile/:user_id")]
    UserProfile { user_id: String },
}

#[component]
pub fn App() -> Element {
    let app_config = use_signal(config::shared);
    use_context_provider(|| app_config.clone());

    let (initial, notice) = use_hook(|| initial_state(&app_config.peek()));
    let state = use_signal(|| initial);
    use_context_provider(|| state.clone());

    let toasts = use_signal(|| notice.into_iter().collect::<Vec<ToastMessage>>());
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Seed override from the config first, then the bundled data, then an empty catalog.
fn initial_state(config: &AppConfig) -> (AppState, Option<ToastMessage>) {
    let now = local_now();
    let mut notice = None;
    if let Some(path) = config.seed_path.as_deref() {
        match seed::load_file(path, now) {
            Ok(state) => return (state, None),
            Err(err) => {
                warn!(error = %err, "seed override unusable, falling back to bundled data");
                notice = Some(ToastMessage::new(
                    ToastKind::Warning,
                    format!("Could not load {}: using bundled books.", path.display()),
                ));
            }
        }
    }
    match seed::load_embedded(now) {
        Ok(state) => (state, notice),
        Err(err) => {
            error!(error = %err, "bundled seed data unusable");
            (
                AppState::default(),
                Some(ToastMessage::new(
                    ToastKind::Error,
                    format!("Failed to load books: {err}"),
                )),
            )
        }
    }
}

#[component]
pub fn Browse() -> Element {
    rsx! { Shell { BrowsePage {} } }
}

#[component]
pub fn BookDetail(id: String) -> Element {
    rsx! { Shell { BookDetailPage { id } } }
}

#[component]
pub fn MakeOffer(id: String) -> Element {
    rsx! { Shell { MakeOfferPage { id } } }
}

#[component]
pub fn Messages() -> Element {
    rsx! { Shell { MessagesPage {} } }
}

#[component]
pub fn Conversation(conversation_id: String) -> Element {
    rsx! { Shell { MessagesPage { conversation_id: Some(conversation_id) } } }
}

#[component]
pub fn Profile() -> Element {
    rsx! { Shell { ProfilePage {} } }
}

#[component]
pub fn UserProfile(user_id: String) -> Element {
    rsx! { Shell { ProfilePage { user_id: Some(user_id) } } }
}
