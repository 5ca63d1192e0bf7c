//! Window-manager core and Leptos desktop shell.
//!
//! State lives in [`DesktopState`] and [`InteractionState`] and changes only through
//! [`reduce_desktop`]. The [`DesktopProvider`] component owns both signals and executes the
//! [`RuntimeEffect`] values the reducer emits; [`DesktopShell`] renders the shell surfaces.

pub mod apps;
pub mod clock;
pub mod components;
pub mod config;
mod effect_executor;
pub mod interaction;
pub mod launcher;
pub mod model;
pub mod placement;
pub mod reducer;
mod runtime_context;
pub mod shell;
pub mod viewport;
pub mod wallpaper;
pub mod window_manager;

pub use apps::{builtin_catalog, builtin_spotlight_documents, AppCatalog};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::WindowLayoutConfig;
pub use launcher::{open_app, open_app_by_id, DesktopError};
pub use model::*;
pub use placement::PlacementEngine;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use viewport::ViewportTracker;
pub use wallpaper::WallpaperPreset;
pub use window_manager::WindowRegistry;
