//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod dock;
mod menu_bar;
mod notifications;
mod spotlight;
mod window;

use leptos::*;

use self::{
    dock::Dock, menu_bar::MenuBar, notifications::NotificationStack, spotlight::SpotlightOverlay,
    window::DesktopWindow,
};

use crate::{
    apps,
    model::{PointerPosition, WindowFrame, WindowId, WindowRecord},
    placement::maximized_frame,
    reducer::DesktopAction,
    shell::{resolve_shortcut, KeyChord},
};

pub(crate) use a11y::focus_element_by_id;
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// DOM id of the spotlight search field.
pub(crate) const SPOTLIGHT_INPUT_ID: &str = "spotlight-input";

#[component]
/// Renders the menu bar, window layer, dock and overlays over the wallpaper.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let chord = key_chord_from_keyboard_event(&ev);
        if let Some(action) = resolve_shortcut(&chord, &state.get_untracked()) {
            ev.prevent_default();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().is_idle() {
            return;
        }
        runtime.dispatch_action(DesktopAction::UpdateGesture {
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if !runtime.interaction.get_untracked().is_idle() {
            runtime.dispatch_action(DesktopAction::EndGesture);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-wallpaper=move || state.get().wallpaper.id()
            style=move || format!("background:{};", state.get().wallpaper.css_background())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <MenuBar />

            <div class="desktop-window-layer">
                <For
                    each=move || state.get().registry.windows().to_vec()
                    key=|win| win.id.0
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <Dock />
            <SpotlightOverlay />
            <NotificationStack />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn key_chord_from_keyboard_event(ev: &web_sys::KeyboardEvent) -> KeyChord {
    KeyChord {
        key: ev.key(),
        code: ev.code(),
        meta: ev.meta_key(),
        ctrl: ev.ctrl_key(),
    }
}
