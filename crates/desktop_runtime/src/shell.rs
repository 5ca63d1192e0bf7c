//! Shell surfaces that sit around the window layer.
//!
//! Each submodule is pure state and derivation logic; the Leptos views live in
//! [`crate::components`] and feed user input back through [`crate::reducer::DesktopAction`].

pub mod dock;
pub mod menu_bar;
pub mod notifications;
pub mod shortcuts;
pub mod spotlight;

pub use dock::{dock_activation, dock_items, DockActivation, DockItem};
pub use menu_bar::{active_app_name, menu_items, APPLE_MENU_ITEMS};
pub use notifications::{Notification, NotificationCenter, NotificationId, NotificationRequest};
pub use shortcuts::{resolve_shortcut, KeyChord};
pub use spotlight::{search, SpotlightDocument, SpotlightResult, SpotlightState};
