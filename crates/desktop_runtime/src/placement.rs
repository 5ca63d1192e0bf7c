//! Initial window placement and viewport clamping.

use crate::config::WindowLayoutConfig;
use crate::model::{Viewport, WindowFrame, WindowPosition, WindowSize};

/// Constrains `position` so a window of `size` stays reachable inside `viewport`.
///
/// `x` lands in `[padding, max(vw - w - padding, padding)]` and `y` in
/// `[menu_bar_offset, max(vh - h - padding, menu_bar_offset)]`. The function is idempotent.
pub fn clamp_position(
    position: WindowPosition,
    size: WindowSize,
    viewport: Viewport,
    config: &WindowLayoutConfig,
) -> WindowPosition {
    let min_x = config.padding;
    let min_y = config.menu_bar_offset;
    let max_x = (viewport.width - size.width - config.padding).max(min_x);
    let max_y = (viewport.height - size.height - config.padding).max(min_y);
    WindowPosition {
        x: position.x.clamp(min_x, max_x),
        y: position.y.clamp(min_y, max_y),
    }
}

/// Layout used while a window is maximized: full width, between the menu bar and the dock.
pub fn maximized_frame(viewport: Viewport, config: &WindowLayoutConfig) -> WindowFrame {
    WindowFrame {
        x: 0,
        y: config.menu_bar_offset,
        width: viewport.width,
        height: (viewport.height - config.menu_bar_offset - config.dock_reserve)
            .max(config.min_height),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementEngine {
    config: WindowLayoutConfig,
    seed: WindowPosition,
}

impl PlacementEngine {
    pub fn new(config: WindowLayoutConfig) -> Self {
        Self {
            config,
            seed: config.cascade_origin,
        }
    }

    pub fn config(&self) -> &WindowLayoutConfig {
        &self.config
    }

    /// Current cascade seed; the default position of the next unpositioned window.
    pub fn seed(&self) -> WindowPosition {
        self.seed
    }

    pub fn clamp(&self, position: WindowPosition, size: WindowSize, viewport: Viewport) -> WindowPosition {
        clamp_position(position, size, viewport, &self.config)
    }

    /// Returns the clamped position for a new window and advances the cascade seed.
    pub fn compute_initial_placement(
        &mut self,
        requested: Option<WindowPosition>,
        size: WindowSize,
        viewport: Viewport,
    ) -> WindowPosition {
        let position = self.clamp(requested.unwrap_or(self.seed), size, viewport);
        self.advance_seed(viewport);
        position
    }

    /// Steps the seed; when either axis passes its wrap line both axes restart at the origin.
    fn advance_seed(&mut self, viewport: Viewport) {
        let step = self.config.cascade_step;
        let next = self.seed.offset(step.x, step.y);
        let wrap_x = viewport.width - self.config.cascade_wrap_margin;
        let wrap_y = viewport.height - self.config.cascade_wrap_margin;
        self.seed = if next.x > wrap_x || next.y > wrap_y {
            self.config.cascade_origin
        } else {
            next
        };
    }
}
