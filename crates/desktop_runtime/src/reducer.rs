//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::time::Duration;

use desktop_app_contract::AppId;
use leptos::logging;

use crate::{
    clock,
    interaction::{
        begin_move, begin_resize, double_activate_title_bar, end_gesture, update_gesture,
    },
    launcher::{open_app, open_app_by_id},
    model::{DesktopState, InteractionState, OpenAppOptions, PointerPosition, WindowId},
    shell::{
        dock_activation, spotlight::register_documents, DockActivation, NotificationId,
        NotificationRequest, SpotlightDocument,
    },
    wallpaper::WallpaperPreset,
};

pub use crate::launcher::DesktopError;

/// Apps opened by the boot sequence, with their requested positions.
const BOOT_APPS: [(AppId, Option<(i32, i32)>); 3] = [
    (AppId::Finder, None),
    (AppId::Safari, Some((340, 180))),
    (AppId::Notes, Some((560, 240))),
];

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Launch an app, or focus its window when it is an open singleton.
    OpenApp {
        /// App to launch.
        app_id: AppId,
        /// Title, position and size overrides.
        options: OpenAppOptions,
    },
    /// Launch an app named by a raw string id.
    OpenAppById {
        /// Unparsed app id.
        app_id: String,
        /// Title, position and size overrides.
        options: OpenAppOptions,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Restore and raise a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip the maximized flag of a window.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Replace a window title.
    SetWindowTitle {
        /// Window to rename.
        window_id: WindowId,
        /// New title.
        title: String,
    },
    /// Pointer-down on a title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-down on a resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer-move during a drag or resize.
    UpdateGesture {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up or pointer-cancel.
    EndGesture,
    /// A title bar or resize handle lost pointer capture.
    PointerCaptureLost {
        /// Window whose element lost capture.
        window_id: WindowId,
    },
    /// Double-activation of a title bar.
    TitleBarDoubleActivate {
        /// Window whose title bar was activated.
        window_id: WindowId,
    },
    /// The drawing area changed size.
    ViewportResized {
        /// New width in CSS pixels.
        width: i32,
        /// New height in CSS pixels.
        height: i32,
    },
    /// Dock tile click.
    ActivateDockItem {
        /// App behind the tile.
        app_id: AppId,
    },
    /// Minimize whichever window is on top.
    MinimizeTopmost,
    /// Open or close spotlight.
    ToggleSpotlight,
    /// Set spotlight visibility explicitly.
    SetSpotlightOpen {
        /// Whether spotlight should be shown.
        open: bool,
    },
    /// Replace the spotlight query.
    SetSpotlightQuery {
        /// Query text.
        query: String,
    },
    /// A spotlight result was chosen.
    ActivateSpotlightResult {
        /// App the result opens.
        app_id: AppId,
    },
    /// Add or replace searchable documents.
    RegisterSpotlightDocuments {
        /// Documents keyed by [`SpotlightDocument::key`].
        documents: Vec<SpotlightDocument>,
    },
    /// Show a notification.
    PushNotification {
        /// Notification content.
        request: NotificationRequest,
    },
    /// Remove a notification.
    DismissNotification {
        /// Notification to remove.
        notification_id: NotificationId,
    },
    /// Switch the wallpaper preset; unknown ids are ignored.
    SetWallpaper {
        /// Preset id.
        wallpaper_id: String,
    },
    /// Run the boot launch sequence once.
    LaunchBootApps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::DismissNotification`] once `after` elapses.
    ScheduleNotificationDismiss {
        /// Notification to dismiss.
        notification_id: NotificationId,
        /// Delay before dismissal.
        after: Duration,
    },
    /// Move keyboard focus into the spotlight query field.
    FocusSpotlightInput,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions that target a window id which is no longer registered are no-ops returning no effects.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownApplication`] when a launch names an app outside the catalog.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, DesktopError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id, options } => {
            open_app(state, app_id, options)?;
        }
        DesktopAction::OpenAppById { app_id, options } => {
            open_app_by_id(state, &app_id, options)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.registry.close(window_id) {
                end_gesture_on(interaction, window_id);
                refresh_active_app(state);
            } else {
                stale_window(window_id, "close");
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            minimize_window(state, interaction, window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            if !state.registry.toggle_maximize(window_id) {
                stale_window(window_id, "toggle maximize");
            }
        }
        DesktopAction::SetWindowTitle { window_id, title } => {
            if !state.registry.set_title(window_id, title) {
                stale_window(window_id, "retitle");
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let raises = raises_on_gesture(state, window_id);
            begin_move(&mut state.registry, interaction, window_id, pointer);
            if raises {
                sync_active_app_to(state, window_id);
            } else {
                logging::debug_warn!("ignoring move gesture on window {}", window_id.0);
            }
        }
        DesktopAction::BeginResize { window_id, pointer } => {
            let raises = raises_on_gesture(state, window_id);
            begin_resize(&mut state.registry, interaction, window_id, pointer);
            if raises {
                sync_active_app_to(state, window_id);
            } else {
                logging::debug_warn!("ignoring resize gesture on window {}", window_id.0);
            }
        }
        DesktopAction::UpdateGesture { pointer } => {
            let viewport = state.viewport.current();
            update_gesture(&mut state.registry, interaction, pointer, viewport);
        }
        DesktopAction::EndGesture => {
            end_gesture(interaction);
        }
        DesktopAction::PointerCaptureLost { window_id } => {
            end_gesture_on(interaction, window_id);
        }
        DesktopAction::TitleBarDoubleActivate { window_id } => {
            double_activate_title_bar(&mut state.registry, window_id);
        }
        DesktopAction::ViewportResized { width, height } => {
            state.viewport.resize(width, height);
        }
        DesktopAction::ActivateDockItem { app_id } => {
            match dock_activation(&state.registry, app_id) {
                DockActivation::Focus(window_id) => focus_window(state, window_id),
                DockActivation::Minimize(window_id) => {
                    minimize_window(state, interaction, window_id)
                }
                DockActivation::Launch(app_id) => {
                    open_app(state, app_id, OpenAppOptions::default())?;
                }
            }
        }
        DesktopAction::MinimizeTopmost => {
            if let Some(window_id) = state.focused_window_id() {
                minimize_window(state, interaction, window_id);
            }
        }
        DesktopAction::ToggleSpotlight => {
            state.spotlight.toggle();
            if state.spotlight.open {
                effects.push(RuntimeEffect::FocusSpotlightInput);
            }
        }
        DesktopAction::SetSpotlightOpen { open } => {
            let opening = open && !state.spotlight.open;
            state.spotlight.set_open(open);
            if opening {
                effects.push(RuntimeEffect::FocusSpotlightInput);
            }
        }
        DesktopAction::SetSpotlightQuery { query } => {
            state.spotlight.query = query;
        }
        DesktopAction::ActivateSpotlightResult { app_id } => {
            state.spotlight.set_open(false);
            open_app(state, app_id, OpenAppOptions::default())?;
        }
        DesktopAction::RegisterSpotlightDocuments { documents } => {
            register_documents(&mut state.spotlight_documents, documents);
        }
        DesktopAction::PushNotification { request } => {
            let notification_id = state.notifications.push(request, clock::now_ms());
            effects.push(RuntimeEffect::ScheduleNotificationDismiss {
                notification_id,
                after: state.config().notification_ttl(),
            });
        }
        DesktopAction::DismissNotification { notification_id } => {
            state.notifications.dismiss(notification_id);
        }
        DesktopAction::SetWallpaper { wallpaper_id } => match WallpaperPreset::from_id(&wallpaper_id)
        {
            Some(preset) => state.wallpaper = preset,
            None => {
                logging::debug_warn!("ignoring unknown wallpaper `{wallpaper_id}`");
            }
        },
        DesktopAction::LaunchBootApps => {
            if !state.booted {
                state.booted = true;
                for (app_id, position) in BOOT_APPS {
                    let options = match position {
                        Some((x, y)) => OpenAppOptions::at(x, y),
                        None => OpenAppOptions::default(),
                    };
                    open_app(state, app_id, options)?;
                }
                logging::log!("desktop boot opened {} windows", state.registry.len());
            }
        }
    }

    Ok(effects)
}

fn focus_window(state: &mut DesktopState, window_id: WindowId) {
    if state.registry.focus(window_id) {
        sync_active_app_to(state, window_id);
    } else {
        stale_window(window_id, "focus");
    }
}

fn minimize_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
) {
    if state.registry.minimize(window_id) {
        end_gesture_on(interaction, window_id);
        refresh_active_app(state);
    } else {
        stale_window(window_id, "minimize");
    }
}

/// Drops the active gesture when it targets `window_id`.
fn end_gesture_on(interaction: &mut InteractionState, window_id: WindowId) {
    if interaction.active_window() == Some(window_id) {
        end_gesture(interaction);
    }
}

fn raises_on_gesture(state: &DesktopState, window_id: WindowId) -> bool {
    state
        .registry
        .get(window_id)
        .is_some_and(|window| window.is_visible())
}

fn sync_active_app_to(state: &mut DesktopState, window_id: WindowId) {
    if let Some(window) = state.registry.get(window_id) {
        state.active_app_id = Some(window.app_id);
    }
}

fn refresh_active_app(state: &mut DesktopState) {
    state.active_app_id = state.registry.topmost_visible().map(|w| w.app_id);
}

fn stale_window(window_id: WindowId, operation: &str) {
    logging::debug_warn!("ignoring {operation} for missing window {}", window_id.0);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowPosition;

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        reduce(
            state,
            interaction,
            DesktopAction::OpenApp {
                app_id,
                options: OpenAppOptions::default(),
            },
        );
        state.focused_window_id().expect("opened window")
    }

    #[test]
    fn boot_sequence_opens_three_windows_once() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, DesktopAction::LaunchBootApps);
        reduce(&mut state, &mut interaction, DesktopAction::LaunchBootApps);

        let placed: Vec<(AppId, WindowPosition)> = state
            .ordered_windows()
            .into_iter()
            .map(|w| (w.app_id, w.position))
            .collect();
        assert_eq!(
            placed,
            vec![
                (AppId::Finder, WindowPosition { x: 120, y: 120 }),
                (AppId::Safari, WindowPosition { x: 340, y: 180 }),
                (AppId::Notes, WindowPosition { x: 560, y: 240 }),
            ]
        );
        assert_eq!(state.active_app_id, Some(AppId::Notes));
    }

    #[test]
    fn closing_and_minimizing_recompute_active_app() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let mail = open(&mut state, &mut interaction, AppId::Mail);
        let music = open(&mut state, &mut interaction, AppId::Music);
        assert_eq!(state.active_app_id, Some(AppId::Music));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: music },
        );
        assert_eq!(state.active_app_id, Some(AppId::Mail));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: mail },
        );
        assert_eq!(state.active_app_id, None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: mail },
        );
        assert_eq!(state.active_app_id, Some(AppId::Mail));
        assert!(!state.registry.get(mail).expect("window").minimized);
    }

    #[test]
    fn stale_window_ids_are_silent_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Finder);
        let before = state.clone();
        let ghost = WindowId(999);

        for action in [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::FocusWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::ToggleMaximize { window_id: ghost },
            DesktopAction::SetWindowTitle {
                window_id: ghost,
                title: "ghost".to_string(),
            },
            DesktopAction::BeginMove {
                window_id: ghost,
                pointer: PointerPosition { x: 0, y: 0 },
            },
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 5, y: 5 },
            },
            DesktopAction::EndGesture,
        ] {
            assert_eq!(reduce(&mut state, &mut interaction, action), Vec::new());
        }
        assert_eq!(state, before);
        assert!(interaction.is_idle());
    }

    #[test]
    fn dock_click_launches_then_minimizes_then_restores() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let click = DesktopAction::ActivateDockItem {
            app_id: AppId::Photos,
        };

        reduce(&mut state, &mut interaction, click.clone());
        let photos = state.focused_window_id().expect("launched");
        reduce(&mut state, &mut interaction, click.clone());
        assert!(state.registry.get(photos).expect("window").minimized);
        assert_eq!(state.active_app_id, None);
        reduce(&mut state, &mut interaction, click);
        assert!(!state.registry.get(photos).expect("window").minimized);
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.active_app_id, Some(AppId::Photos));
    }

    #[test]
    fn gesture_start_activates_the_raised_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = open(&mut state, &mut interaction, AppId::Finder);
        open(&mut state, &mut interaction, AppId::Terminal);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: finder,
                pointer: PointerPosition { x: 200, y: 130 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 250, y: 160 },
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndGesture);

        assert_eq!(state.focused_window_id(), Some(finder));
        assert_eq!(state.active_app_id, Some(AppId::Finder));
        assert_eq!(
            state.registry.get(finder).map(|w| w.position),
            Some(WindowPosition { x: 170, y: 150 })
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn cmd_m_minimizes_the_topmost_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = open(&mut state, &mut interaction, AppId::Finder);
        let safari = open(&mut state, &mut interaction, AppId::Safari);

        reduce(&mut state, &mut interaction, DesktopAction::MinimizeTopmost);

        assert!(state.registry.get(safari).expect("window").minimized);
        assert_eq!(state.focused_window_id(), Some(finder));
        assert_eq!(state.active_app_id, Some(AppId::Finder));
    }

    #[test]
    fn spotlight_toggle_focuses_input_and_activation_opens_app() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(&mut state, &mut interaction, DesktopAction::ToggleSpotlight);
        assert_eq!(effects, vec![RuntimeEffect::FocusSpotlightInput]);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetSpotlightQuery {
                query: "cal".to_string(),
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateSpotlightResult {
                app_id: AppId::Calendar,
            },
        );

        assert!(!state.spotlight.open);
        assert!(state.spotlight.query.is_empty());
        assert_eq!(state.active_app_id, Some(AppId::Calendar));
        assert_eq!(
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::SetSpotlightOpen { open: false }
            ),
            Vec::new()
        );
    }

    #[test]
    fn notifications_schedule_auto_dismiss() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PushNotification {
                request: NotificationRequest {
                    title: "Welcome".to_string(),
                    body: "Your desktop is ready".to_string(),
                    app_id: None,
                    timestamp_ms: Some(5),
                },
            },
        );
        let notification_id = state.notifications.items()[0].id;

        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleNotificationDismiss {
                notification_id,
                after: Duration::from_secs(8),
            }]
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DismissNotification { notification_id },
        );
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn unknown_launches_fail_without_touching_state() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenAppById {
                app_id: "doesnotexist".to_string(),
                options: OpenAppOptions::default(),
            },
        );

        assert_eq!(
            result,
            Err(DesktopError::UnknownApplication("doesnotexist".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn wallpaper_ignores_unknown_presets() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: "graphite".to_string(),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: "bliss".to_string(),
            },
        );

        assert_eq!(state.wallpaper, WallpaperPreset::Graphite);
    }

    #[test]
    fn viewport_resize_tightens_later_clamps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = open(&mut state, &mut interaction, AppId::Finder);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                width: 1000,
                height: 700,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: finder,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 900, y: 900 },
            },
        );

        assert_eq!(
            state.registry.get(finder).map(|w| w.position),
            Some(WindowPosition {
                x: 1000 - 920 - 16,
                y: 700 - 600 - 16,
            })
        );
    }

    #[test]
    fn minimizing_the_dragged_window_ends_the_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = open(&mut state, &mut interaction, AppId::Finder);
        let before = state.registry.get(finder).map(|w| w.position);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: finder,
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::MinimizeTopmost);
        assert!(interaction.is_idle());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGesture {
                pointer: PointerPosition { x: 400, y: 450 },
            },
        );

        assert!(state.registry.get(finder).expect("finder").minimized);
        assert_eq!(state.registry.get(finder).map(|w| w.position), before);
    }

    #[test]
    fn capture_loss_ends_only_the_gesture_on_that_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let finder = open(&mut state, &mut interaction, AppId::Finder);
        let terminal = open(&mut state, &mut interaction, AppId::Terminal);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: finder,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerCaptureLost { window_id: terminal },
        );
        assert_eq!(interaction.active_window(), Some(finder));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerCaptureLost { window_id: finder },
        );
        assert!(interaction.is_idle());
    }
}
