//! Application Context
//!
//! Shared state provided via Leptos Context API: session, configuration and
//! the notification queue.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, GlooTransport};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::session::{Session, SessionStore};
use crate::storage::BrowserStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Danger,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification is-success fade-in",
            NotificationKind::Info => "notification is-info fade-in",
            NotificationKind::Danger => "notification is-danger fade-in",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Visible notifications, oldest first. Ids are never reused within a
/// queue, so a late expiry cannot remove a newer notification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u32,
}

impl NotificationQueue {
    /// Append a notification and return its id
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove by id, on dismissal or expiry. False if already gone.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session store, restored at startup
    pub session: RwSignal<SessionStore<BrowserStorage>>,
    pub notifications: RwSignal<NotificationQueue>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(session: SessionStore<BrowserStorage>, config: AppConfig) -> Self {
        Self {
            session: RwSignal::new(session),
            notifications: RwSignal::new(NotificationQueue::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Current session, tracked
    pub fn current_session(&self) -> Option<Session> {
        self.session.with(|store| store.current().cloned())
    }

    /// API client carrying the current bearer token
    pub fn api(&self) -> ApiClient<GlooTransport> {
        let token = self
            .session
            .with_untracked(|store| store.token().map(str::to_string));
        ApiClient::new(GlooTransport, self.config.with_value(|c| c.api_base.clone()))
            .with_token(token)
    }

    /// Show a transient notification; it dismisses itself after the TTL
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let Some(id) = self
            .notifications
            .try_update(|queue| queue.push(message, kind))
        else {
            return;
        };

        let ttl: Duration = self.config.with_value(|c| c.notification_ttl);
        let notifications = self.notifications;
        spawn_local(async move {
            TimeoutFuture::new(ttl.as_millis() as u32).await;
            notifications.update(|queue| {
                queue.remove(id);
            });
        });
    }

    pub fn notify_error(&self, error: &AppError) {
        log::warn!(target: "App", "{}", error);
        self.notify(error.to_string(), NotificationKind::Danger);
    }

    pub fn dismiss(&self, id: u32) {
        self.notifications.update(|queue| {
            queue.remove(id);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
