//! Transient notification stack, newest first.

use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};

use crate::apps::AppCatalog;

const SYSTEM_SOURCE_NAME: &str = "System";
const SYSTEM_SOURCE_ICON: &str = "🔔";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub app_id: Option<AppId>,
    pub timestamp_ms: u64,
}

/// Caller input for [`NotificationCenter::push`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub app_id: Option<AppId>,
    /// Defaults to the push time.
    pub timestamp_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl NotificationCenter {
    /// Pending notifications, newest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, request: NotificationRequest, now_ms: u64) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.items.insert(
            0,
            Notification {
                id,
                title: request.title,
                body: request.body,
                app_id: request.app_id,
                timestamp_ms: request.timestamp_ms.unwrap_or(now_ms),
            },
        );
        id
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

/// Display name and glyph of the app that raised a notification.
pub fn notification_source(catalog: &AppCatalog, app_id: Option<AppId>) -> (String, String) {
    match app_id.and_then(|id| catalog.get(id)) {
        Some(def) => (def.name.clone(), def.icon.clone()),
        None => (
            SYSTEM_SOURCE_NAME.to_string(),
            SYSTEM_SOURCE_ICON.to_string(),
        ),
    }
}
