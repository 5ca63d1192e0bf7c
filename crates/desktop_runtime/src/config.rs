//! Layout and timing constants for the window manager and shell surfaces.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Viewport, WindowPosition};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 380;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 280;
/// Edge padding windows keep from the viewport border.
pub const VIEWPORT_PADDING: i32 = 16;
/// Lowest y a window may occupy; clears the rendered menu bar.
pub const MENU_BAR_OFFSET: i32 = 44;
/// Bottom inset reserved for the dock while a window is maximized.
pub const DOCK_RESERVE: i32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Window-manager geometry and timer settings.
pub struct WindowLayoutConfig {
    pub padding: i32,
    pub menu_bar_offset: i32,
    pub dock_reserve: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub cascade_origin: WindowPosition,
    pub cascade_step: WindowPosition,
    /// Distance from the right/bottom edge at which the cascade wraps to its origin.
    pub cascade_wrap_margin: i32,
    pub default_viewport: Viewport,
    pub notification_ttl_ms: u64,
    pub boot_delay_ms: u64,
}

impl Default for WindowLayoutConfig {
    fn default() -> Self {
        Self {
            padding: VIEWPORT_PADDING,
            menu_bar_offset: MENU_BAR_OFFSET,
            dock_reserve: DOCK_RESERVE,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            cascade_origin: WindowPosition { x: 120, y: 120 },
            cascade_step: WindowPosition { x: 28, y: 24 },
            cascade_wrap_margin: 200,
            default_viewport: Viewport {
                width: 1440,
                height: 900,
            },
            notification_ttl_ms: 8_000,
            boot_delay_ms: 400,
        }
    }
}

impl WindowLayoutConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_delay_ms)
    }
}
