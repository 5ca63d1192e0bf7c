use super::*;
use crate::{shell::dock_items, wallpaper::WallpaperPreset};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let items = create_memo(move |_| {
        let desktop = state.get();
        dock_items(&desktop.catalog, &desktop.registry)
    });

    view! {
        <footer class="dock" aria-label="Dock">
            <div class="dock-apps">
                <For each=move || items.get() key=|item| (item.app_id, item.running) let:item>
                    {{
                        let app_id = item.app_id;
                        let running = item.running;
                        view! {
                            <button
                                class="dock-item"
                                class:running=running
                                title=item.name.clone()
                                aria-label=item.name.clone()
                                style=format!("--dock-accent:{};", item.accent)
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::ActivateDockItem { app_id });
                                }
                            >
                                <span class="dock-icon" aria-hidden="true">{item.icon.clone()}</span>
                                {running
                                    .then(|| view! { <span class="dock-running-dot" aria-hidden="true"></span> })}
                            </button>
                        }
                    }}
                </For>
            </div>
            <div class="dock-separator" aria-hidden="true"></div>
            <div class="dock-wallpapers" role="radiogroup" aria-label="Wallpaper">
                {WallpaperPreset::ALL
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                class="dock-wallpaper"
                                role="radio"
                                title=preset.display_name()
                                aria-checked=move || (state.get().wallpaper == preset).to_string()
                                style=format!("background:{};", preset.css_background())
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::SetWallpaper {
                                        wallpaper_id: preset.id().to_string(),
                                    });
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
