//! Window-manager records, gesture sessions, and the aggregate desktop state.

use std::rc::Rc;

use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};

use crate::{
    apps::{builtin_catalog, AppCatalog},
    config::WindowLayoutConfig,
    placement::PlacementEngine,
    shell::{NotificationCenter, SpotlightDocument, SpotlightState},
    viewport::ViewportTracker,
    wallpaper::WallpaperPreset,
    window_manager::WindowRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// Resolved paint rectangle for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub minimized: bool,
    pub maximized: bool,
    /// Reserved; a hidden window is neither painted nor interactable.
    pub hidden: bool,
    pub z_index: u64,
    pub created_at_ms: u64,
}

impl WindowRecord {
    /// Whether the window is painted and accepts pointer input.
    pub fn is_visible(&self) -> bool {
        !self.minimized && !self.hidden
    }

    /// Whether drag and resize gestures may start on this window.
    pub fn accepts_gestures(&self) -> bool {
        self.is_visible() && !self.maximized
    }

    pub fn frame(&self) -> WindowFrame {
        WindowFrame {
            x: self.position.x,
            y: self.position.y,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

/// A window whose geometry was already computed by the placement engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWindow {
    pub app_id: AppId,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub created_at_ms: u64,
}

/// Caller overrides for a launch; unset fields fall back to the app definition and cascade.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenAppOptions {
    pub title: Option<String>,
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
}

impl OpenAppOptions {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Some(WindowPosition { x, y }),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
}

/// The single system-wide pointer gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub gesture: Gesture,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    pub fn active_window(&self) -> Option<WindowId> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(session) => Some(session.window_id),
            Gesture::Resizing(session) => Some(session.window_id),
        }
    }
}

/// Everything the desktop shell renders, mutated only through [`crate::reducer::reduce_desktop`].
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub placement: PlacementEngine,
    pub viewport: ViewportTracker,
    pub catalog: Rc<AppCatalog>,
    /// App named in the menu bar.
    pub active_app_id: Option<AppId>,
    pub spotlight: SpotlightState,
    pub spotlight_documents: Vec<SpotlightDocument>,
    pub notifications: NotificationCenter,
    pub wallpaper: WallpaperPreset,
    /// Set once the boot launch sequence ran.
    pub booted: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        let config = WindowLayoutConfig::default();
        Self::new(config, builtin_catalog(), config.default_viewport)
    }
}

impl DesktopState {
    pub fn new(config: WindowLayoutConfig, catalog: Rc<AppCatalog>, viewport: Viewport) -> Self {
        Self {
            registry: WindowRegistry::new(config),
            placement: PlacementEngine::new(config),
            viewport: ViewportTracker::new(viewport),
            catalog,
            active_app_id: None,
            spotlight: SpotlightState::default(),
            spotlight_documents: Vec::new(),
            notifications: NotificationCenter::default(),
            wallpaper: WallpaperPreset::default(),
            booted: false,
        }
    }

    pub fn config(&self) -> &WindowLayoutConfig {
        self.registry.config()
    }

    /// Windows in paint order.
    pub fn ordered_windows(&self) -> Vec<WindowRecord> {
        self.registry.ordered()
    }

    /// Window that currently has keyboard focus: the topmost painted one.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.registry.topmost_visible().map(|w| w.id)
    }
}
