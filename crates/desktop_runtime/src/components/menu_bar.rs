use std::time::Duration;

use desktop_app_contract::AppId;

use super::*;
use crate::{
    clock::ClockSnapshot,
    model::OpenAppOptions,
    shell::{active_app_name, menu_bar::notification_glyph, menu_items, APPLE_MENU_ITEMS},
};

const CLOCK_REFRESH: Duration = Duration::from_secs(30);

fn open_app(runtime: DesktopRuntimeContext, app_id: AppId) {
    runtime.dispatch_action(DesktopAction::OpenApp {
        app_id,
        options: OpenAppOptions::default(),
    });
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let apple_menu_open = create_rw_signal(false);
    let clock = create_rw_signal(ClockSnapshot::now());

    match set_interval_with_handle(move || clock.set(ClockSnapshot::now()), CLOCK_REFRESH) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("menu bar clock timer failed: {err:?}"),
    }

    let app_name = create_memo(move |_| {
        let desktop = state.get();
        active_app_name(&desktop.catalog, desktop.active_app_id)
    });
    let items = create_memo(move |_| {
        let desktop = state.get();
        menu_items(&desktop.catalog, desktop.active_app_id)
    });

    view! {
        <nav class="menu-bar" aria-label="Menu bar">
            <div class="menu-bar-left">
                <div class="menu-bar-apple">
                    <button
                        class="menu-bar-logo"
                        aria-label="Open Finder"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            apple_menu_open.set(false);
                            open_app(runtime, AppId::Finder);
                        }
                    >
                        ""
                    </button>
                    <button
                        class="menu-bar-apple-toggle"
                        aria-label="Apple menu"
                        aria-haspopup="menu"
                        aria-expanded=move || apple_menu_open.get().to_string()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            apple_menu_open.update(|open| *open = !*open);
                        }
                    >
                        "▾"
                    </button>
                    <Show when=move || apple_menu_open.get() fallback=|| ()>
                        <ul class="menu-dropdown" role="menu">
                            {APPLE_MENU_ITEMS
                                .iter()
                                .map(|label| {
                                    let label = *label;
                                    view! {
                                        <li role="none">
                                            <button
                                                role="menuitem"
                                                on:click=move |ev| {
                                                    stop_mouse_event(&ev);
                                                    apple_menu_open.set(false);
                                                    if label == "System Settings" {
                                                        open_app(runtime, AppId::Settings);
                                                    }
                                                }
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
                <span class="menu-bar-app-name">{move || app_name.get()}</span>
                <For each=move || items.get() key=|label| label.clone() let:label>
                    <span class="menu-bar-item">{label}</span>
                </For>
            </div>
            <div class="menu-bar-right">
                <button
                    class="menu-bar-glyph"
                    aria-label="Open System Settings"
                    on:click=move |_| open_app(runtime, AppId::Settings)
                >
                    "⚙️"
                </button>
                <button
                    class="menu-bar-glyph"
                    aria-label="Open Spotlight"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetSpotlightOpen { open: true })
                    }
                >
                    "🔍"
                </button>
                <span class="menu-bar-glyph" aria-label="Notifications">
                    {move || notification_glyph(!state.get().notifications.is_empty())}
                </span>
                <time class="menu-bar-clock">
                    <span>{move || clock.get().date_label()}</span>
                    " "
                    <span>{move || clock.get().time_label()}</span>
                </time>
            </div>
        </nav>
    }
}
