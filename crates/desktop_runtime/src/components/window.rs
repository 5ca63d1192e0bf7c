use super::*;
use desktop_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary-button or primary-touch pointer-down.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn window_style(window: &WindowRecord, frame: WindowFrame) -> String {
    let display = if window.is_visible() { "" } else { "display:none;" };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{display}",
        frame.x, frame.y, frame.width, frame.height, window.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.get().registry.get(window_id).cloned());
    let frame = create_memo(move |_| {
        let desktop = state.get();
        desktop.registry.get(window_id).map(|win| {
            if win.maximized {
                maximized_frame(desktop.viewport.current(), desktop.config())
            } else {
                win.frame()
            }
        })
    });
    let focused = create_memo(move |_| state.get().focused_window_id() == Some(window_id));

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let capture_lost = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::PointerCaptureLost { window_id });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::TitleBarDoubleActivate { window_id });
    };
    let control = move |action: DesktopAction| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(action.clone());
        }
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            <section
                class=move || {
                    let win = window.get();
                    format!(
                        "desktop-window{}{}",
                        if focused.get() { " focused" } else { "" },
                        if win.is_some_and(|w| w.maximized) { " maximized" } else { "" },
                    )
                }
                style=move || match (window.get(), frame.get()) {
                    (Some(win), Some(frame)) => window_style(&win, frame),
                    _ => String::new(),
                }
                on:pointerdown=focus
                role="dialog"
                aria-label=move || window.get().map(|w| w.title).unwrap_or_default()
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_move
                    on:lostpointercapture=capture_lost
                    on:dblclick=titlebar_double_click
                >
                    <div class="titlebar-controls">
                        <button
                            class="traffic-light close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=control(DesktopAction::CloseWindow { window_id })
                        ></button>
                        <button
                            class="traffic-light minimize"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=control(DesktopAction::MinimizeWindow { window_id })
                        ></button>
                        <button
                            class="traffic-light maximize"
                            aria-label=move || {
                                if window.get().is_some_and(|w| w.maximized) {
                                    "Restore window"
                                } else {
                                    "Maximize window"
                                }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=control(DesktopAction::ToggleMaximize { window_id })
                        ></button>
                    </div>
                    <div class="titlebar-title">
                        {move || window.get().map(|w| w.title).unwrap_or_default()}
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody window_id=window_id />
                </div>
                <Show
                    when=move || window.get().is_some_and(|w| w.accepts_gestures())
                    fallback=|| ()
                >
                    <div
                        class="window-resize-handle"
                        aria-hidden="true"
                        on:pointerdown=begin_resize
                        on:lostpointercapture=capture_lost
                    />
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = runtime
        .state
        .get_untracked()
        .registry
        .get(window_id)
        .map(|w| {
            apps::app_module(w.app_id).mount(AppMountContext {
                app_id: w.app_id,
                window_id: w.id.0,
                title: w.title.clone(),
            })
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
