//! Window registry: the canonical window list and its z-order counter.
//!
//! Every mutation that targets a window id which is no longer registered is a silent no-op;
//! windows can close while gesture or timer callbacks for them are still in flight.

use desktop_app_contract::AppId;

use crate::config::WindowLayoutConfig;
use crate::model::{PlacedWindow, Viewport, WindowId, WindowPosition, WindowRecord, WindowSize};
use crate::placement::clamp_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    config: WindowLayoutConfig,
    windows: Vec<WindowRecord>,
    next_window_id: u64,
    z_counter: u64,
}

impl WindowRegistry {
    pub fn new(config: WindowLayoutConfig) -> Self {
        Self {
            config,
            windows: Vec::new(),
            next_window_id: 1,
            z_counter: 0,
        }
    }

    pub fn config(&self) -> &WindowLayoutConfig {
        &self.config
    }

    /// Records in insertion order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Records in paint order (ascending z-index).
    pub fn ordered(&self) -> Vec<WindowRecord> {
        let mut windows = self.windows.clone();
        windows.sort_by_key(|w| (w.z_index, w.id));
        windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Highest z-index handed out so far.
    pub fn last_z_index(&self) -> u64 {
        self.z_counter
    }

    /// Inserts an already-placed window on top of the stack and returns its new id.
    pub fn open(&mut self, placed: PlacedWindow) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        let z_index = self.next_z_index();
        self.windows.push(WindowRecord {
            id,
            app_id: placed.app_id,
            title: placed.title,
            position: placed.position,
            size: placed.size,
            minimized: false,
            maximized: false,
            hidden: false,
            z_index,
            created_at_ms: placed.created_at_ms,
        });
        id
    }

    pub fn close(&mut self, window_id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != window_id);
        self.windows.len() != before
    }

    /// Restores and raises `window_id` with a fresh maximum z-index.
    pub fn focus(&mut self, window_id: WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w.id == window_id) else {
            return false;
        };
        let z_index = self.next_z_index();
        let window = &mut self.windows[index];
        window.minimized = false;
        window.hidden = false;
        window.z_index = z_index;
        true
    }

    pub fn minimize(&mut self, window_id: WindowId) -> bool {
        self.with_window(window_id, |w| w.minimized = true)
    }

    pub fn toggle_maximize(&mut self, window_id: WindowId) -> bool {
        self.with_window(window_id, |w| w.maximized = !w.maximized)
    }

    pub fn set_title(&mut self, window_id: WindowId, title: String) -> bool {
        self.with_window(window_id, |w| w.title = title)
    }

    /// Stores `position` after clamping it against `viewport` with the window's current size.
    pub fn update_position(
        &mut self,
        window_id: WindowId,
        position: WindowPosition,
        viewport: Viewport,
    ) -> bool {
        let config = self.config;
        self.with_window(window_id, |w| {
            w.position = clamp_position(position, w.size, viewport, &config);
        })
    }

    /// Stores `size` floored at the minimum window dimensions.
    pub fn update_size(&mut self, window_id: WindowId, size: WindowSize) -> bool {
        let floored = size.clamped_min(self.config.min_width, self.config.min_height);
        self.with_window(window_id, |w| w.size = floored)
    }

    /// First window registered for `app_id`.
    pub fn find_by_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// Painted window with the greatest z-index; drives the active application.
    pub fn topmost_visible(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    fn next_z_index(&mut self) -> u64 {
        self.z_counter = self.z_counter.saturating_add(1);
        self.z_counter
    }

    fn with_window(&mut self, window_id: WindowId, apply: impl FnOnce(&mut WindowRecord)) -> bool {
        match self.windows.iter_mut().find(|w| w.id == window_id) {
            Some(window) => {
                apply(window);
                true
            }
            None => false,
        }
    }
}
