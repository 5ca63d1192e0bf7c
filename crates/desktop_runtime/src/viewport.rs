//! Tracks the drawing area available to windows.

use crate::model::Viewport;

/// Smallest viewport the shell lays out against.
const MIN_VIEWPORT_WIDTH: i32 = 320;
const MIN_VIEWPORT_HEIGHT: i32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTracker {
    current: Viewport,
}

impl ViewportTracker {
    pub fn new(initial: Viewport) -> Self {
        let mut tracker = Self { current: initial };
        tracker.resize(initial.width, initial.height);
        tracker
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Records a new drawing area. Returns `true` when the stored viewport changed.
    ///
    /// Existing windows are not reclamped here; the next position write does that.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        let next = Viewport {
            width: width.max(MIN_VIEWPORT_WIDTH),
            height: height.max(MIN_VIEWPORT_HEIGHT),
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

/// Reads the browser's inner window size, falling back to `fallback` off-browser.
pub fn read_browser_viewport(fallback: Viewport) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.height);
            return Viewport { width, height };
        }
    }

    fallback
}
