//! Pointer gesture state machine: `Idle -> Dragging -> Idle` and `Idle -> Resizing -> Idle`.
//!
//! Gestures are driven by discrete pointer inputs so they can be replayed in tests without a
//! pointer device. Only one gesture exists system-wide.

use crate::model::{
    DragSession, Gesture, InteractionState, PointerPosition, ResizeSession, Viewport, WindowId,
    WindowSize,
};
use crate::window_manager::WindowRegistry;

/// Pointer-down on a title bar.
///
/// A visible window is always raised. The drag only starts when the window also accepts gestures
/// (not maximized). Any stale gesture is discarded first. Returns `true` when a drag started.
pub fn begin_move(
    registry: &mut WindowRegistry,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
) -> bool {
    interaction.gesture = Gesture::Idle;
    let Some(window) = registry.get(window_id) else {
        return false;
    };
    if !window.is_visible() {
        return false;
    }
    let accepts = window.accepts_gestures();
    let position_start = window.position;
    registry.focus(window_id);
    if accepts {
        interaction.gesture = Gesture::Dragging(DragSession {
            window_id,
            pointer_start: pointer,
            position_start,
        });
    }
    accepts
}

/// Pointer-down on a resize handle. Same eligibility and focus rules as [`begin_move`].
pub fn begin_resize(
    registry: &mut WindowRegistry,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
) -> bool {
    interaction.gesture = Gesture::Idle;
    let Some(window) = registry.get(window_id) else {
        return false;
    };
    if !window.is_visible() {
        return false;
    }
    let accepts = window.accepts_gestures();
    let size_start = window.size;
    registry.focus(window_id);
    if accepts {
        interaction.gesture = Gesture::Resizing(ResizeSession {
            window_id,
            pointer_start: pointer,
            size_start,
        });
    }
    accepts
}

/// Pointer-move while a gesture may be active. Returns `true` when window geometry was written.
///
/// A gesture whose window has been closed, minimized, hidden or maximized since pointer-down ends
/// here as if the pointer was released.
pub fn update_gesture(
    registry: &mut WindowRegistry,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
    viewport: Viewport,
) -> bool {
    let Some(window_id) = interaction.active_window() else {
        return false;
    };
    if !registry.get(window_id).is_some_and(|w| w.accepts_gestures()) {
        interaction.gesture = Gesture::Idle;
        return false;
    }
    match &interaction.gesture {
        Gesture::Idle => false,
        Gesture::Dragging(session) => {
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            let target = session.position_start.offset(dx, dy);
            registry.update_position(window_id, target, viewport)
        }
        Gesture::Resizing(session) => {
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            let size = WindowSize {
                width: session.size_start.width + dx,
                height: session.size_start.height + dy,
            };
            registry.update_size(window_id, size)
        }
    }
}

/// Pointer-up or pointer-capture loss. The last written geometry stays committed.
pub fn end_gesture(interaction: &mut InteractionState) -> Option<WindowId> {
    let ended = interaction.active_window();
    interaction.gesture = Gesture::Idle;
    ended
}

/// Double-activation of a title bar toggles maximize; it never starts a drag.
pub fn double_activate_title_bar(registry: &mut WindowRegistry, window_id: WindowId) -> bool {
    let visible = registry.get(window_id).is_some_and(|w| w.is_visible());
    visible && registry.toggle_maximize(window_id)
}
