//! Shared contract types between the desktop window manager runtime and the hosted app views.
//!
//! The application set is closed: every app the shell can launch is a variant of [`AppId`], and
//! each variant is bound to exactly one [`AppModule`] by the runtime registry.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, str::FromStr};

use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Closed set of applications shipped with the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// File browser.
    Finder,
    /// Web browser.
    Safari,
    /// Note taking.
    Notes,
    /// Calendar and events.
    Calendar,
    /// Mailbox.
    Mail,
    /// Photo library.
    Photos,
    /// Toy command interpreter.
    Terminal,
    /// System settings.
    Settings,
    /// Music player.
    Music,
    /// Chat threads.
    Messages,
    /// Document viewer.
    Preview,
}

impl AppId {
    /// Every application id, in dock order.
    pub const ALL: [AppId; 11] = [
        AppId::Finder,
        AppId::Safari,
        AppId::Notes,
        AppId::Calendar,
        AppId::Mail,
        AppId::Photos,
        AppId::Terminal,
        AppId::Settings,
        AppId::Music,
        AppId::Messages,
        AppId::Preview,
    ];

    /// Returns the canonical string form used in manifests and URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Safari => "safari",
            Self::Notes => "notes",
            Self::Calendar => "calendar",
            Self::Mail => "mail",
            Self::Photos => "photos",
            Self::Terminal => "terminal",
            Self::Settings => "settings",
            Self::Music => "music",
            Self::Messages => "messages",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any shipped application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application id `{0}`")]
pub struct ParseAppIdError(pub String);

impl FromStr for AppId {
    type Err = ParseAppIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim();
        AppId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ParseAppIdError(raw.to_string()))
    }
}

/// Default window dimensions declared by an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultWindowSize {
    /// Width in CSS pixels.
    pub width: i32,
    /// Height in CSS pixels.
    pub height: i32,
}

/// Catalog metadata for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDefinition {
    /// Application id.
    pub id: AppId,
    /// Display name shown in the dock, menu bar and spotlight.
    pub name: String,
    /// One-line description used by spotlight matching.
    pub description: String,
    /// Dock glyph.
    pub icon: String,
    /// Dock tile gradient class.
    pub accent: String,
    /// Whether at most one window may be open at a time.
    pub singleton: bool,
    /// Size used when the launcher is not given an explicit size.
    pub default_size: DefaultWindowSize,
    /// Menu bar entries shown while the app is active.
    #[serde(default)]
    pub menu_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Context injected by the desktop runtime when an app view is mounted into a window.
pub struct AppMountContext {
    /// Application hosted by the window.
    pub app_id: AppId,
    /// Runtime window id.
    pub window_id: WindowRuntimeId,
    /// Window title at mount time.
    pub title: String,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable view capability bound to one [`AppId`].
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_parses_canonical_names_only() {
        assert_eq!("finder".parse::<AppId>(), Ok(AppId::Finder));
        assert_eq!(" music ".parse::<AppId>(), Ok(AppId::Music));
        assert_eq!(
            "Finder".parse::<AppId>(),
            Err(ParseAppIdError("Finder".to_string()))
        );
        assert!("doesnotexist".parse::<AppId>().is_err());
    }

    #[test]
    fn app_id_string_form_matches_serde_name() {
        for id in AppId::ALL {
            let encoded = serde_json::to_string(&id).expect("serialize app id");
            assert_eq!(encoded, format!("\"{}\"", id.as_str()));
            assert_eq!(id.to_string().parse::<AppId>(), Ok(id));
        }
    }

    #[test]
    fn definition_menu_items_default_to_empty() {
        let raw = r#"{
            "id": "preview",
            "name": "Preview",
            "description": "View documents",
            "icon": "P",
            "accent": "from-sky-500 to-blue-700",
            "singleton": false,
            "default_size": { "width": 860, "height": 620 }
        }"#;
        let definition: AppDefinition = serde_json::from_str(raw).expect("parse definition");
        assert_eq!(definition.id, AppId::Preview);
        assert!(definition.menu_items.is_empty());
    }
}
