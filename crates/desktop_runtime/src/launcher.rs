//! Application launching: new windows, or refocusing an open singleton.

use desktop_app_contract::AppId;
use thiserror::Error;

use crate::{
    apps::default_window_size,
    clock,
    model::{DesktopState, OpenAppOptions, PlacedWindow, WindowId},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by desktop operations.
pub enum DesktopError {
    /// The requested application is not in the catalog.
    #[error("unknown application `{0}`")]
    UnknownApplication(String),
}

/// Opens `app_id`, or focuses its existing window when the app is a singleton.
///
/// The active application becomes `app_id` on success.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownApplication`] when the catalog has no entry for `app_id`; the
/// registry is left untouched.
pub fn open_app(
    state: &mut DesktopState,
    app_id: AppId,
    options: OpenAppOptions,
) -> Result<WindowId, DesktopError> {
    let Some(definition) = state.catalog.get(app_id) else {
        return Err(DesktopError::UnknownApplication(app_id.to_string()));
    };
    let singleton = definition.singleton;
    let default_size = default_window_size(definition);
    let default_title = definition.name.clone();

    if singleton {
        if let Some(existing) = state.registry.find_by_app(app_id).map(|w| w.id) {
            state.registry.focus(existing);
            state.active_app_id = Some(app_id);
            return Ok(existing);
        }
    }

    let config = *state.config();
    let size = options
        .size
        .unwrap_or(default_size)
        .clamped_min(config.min_width, config.min_height);
    let position =
        state
            .placement
            .compute_initial_placement(options.position, size, state.viewport.current());
    let window_id = state.registry.open(PlacedWindow {
        app_id,
        title: options.title.unwrap_or(default_title),
        position,
        size,
        created_at_ms: clock::now_ms(),
    });
    state.active_app_id = Some(app_id);
    Ok(window_id)
}

/// Parses `raw` as an [`AppId`] and launches it.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownApplication`] for ids that do not parse or are not cataloged.
pub fn open_app_by_id(
    state: &mut DesktopState,
    raw: &str,
    options: OpenAppOptions,
) -> Result<WindowId, DesktopError> {
    let app_id = raw
        .parse::<AppId>()
        .map_err(|err| DesktopError::UnknownApplication(err.0))?;
    open_app(state, app_id, options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::AppCatalog;
    use crate::config::WindowLayoutConfig;
    use crate::model::{Viewport, WindowPosition, WindowSize};

    #[test]
    fn first_launch_on_empty_desktop_gets_z_one_and_clamped_position() {
        let mut state = DesktopState::default();

        let id = open_app(&mut state, AppId::Finder, OpenAppOptions::default()).expect("open");

        let windows = state.registry.windows();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].id, id);
        assert_eq!(windows[0].z_index, 1);
        assert_eq!(windows[0].title, "Finder");
        assert_eq!(windows[0].position, WindowPosition { x: 120, y: 120 });
        assert_eq!(state.active_app_id, Some(AppId::Finder));
    }

    #[test]
    fn singleton_reopen_focuses_existing_window() {
        let mut state = DesktopState::default();
        let notes = open_app(&mut state, AppId::Notes, OpenAppOptions::default()).expect("open");
        open_app(&mut state, AppId::Safari, OpenAppOptions::default()).expect("open");
        let seed = state.placement.seed();

        let again = open_app(&mut state, AppId::Notes, OpenAppOptions::at(600, 400)).expect("open");

        assert_eq!(again, notes);
        assert_eq!(state.registry.len(), 2);
        assert_eq!(state.focused_window_id(), Some(notes));
        assert_eq!(state.placement.seed(), seed);
        assert_eq!(state.active_app_id, Some(AppId::Notes));
    }

    #[test]
    fn non_singletons_open_new_cascaded_windows() {
        let mut state = DesktopState::default();
        let first = open_app(&mut state, AppId::Terminal, OpenAppOptions::default()).expect("open");
        let second =
            open_app(&mut state, AppId::Terminal, OpenAppOptions::default()).expect("open");

        assert_ne!(first, second);
        assert_eq!(
            state.registry.get(second).map(|w| w.position),
            Some(WindowPosition { x: 148, y: 144 })
        );
    }

    #[test]
    fn options_override_title_position_and_floor_size() {
        let mut state = DesktopState::default();
        let id = open_app(
            &mut state,
            AppId::Preview,
            OpenAppOptions {
                title: Some("Report.pdf".to_string()),
                position: Some(WindowPosition { x: -10, y: 300 }),
                size: Some(WindowSize {
                    width: 100,
                    height: 100,
                }),
            },
        )
        .expect("open");

        let window = state.registry.get(id).expect("window");
        assert_eq!(window.title, "Report.pdf");
        assert_eq!(window.position, WindowPosition { x: 16, y: 300 });
        assert_eq!(
            window.size,
            WindowSize {
                width: 380,
                height: 280
            }
        );
    }

    #[test]
    fn unknown_ids_leave_registry_unchanged() {
        let mut state = DesktopState::default();
        open_app(&mut state, AppId::Finder, OpenAppOptions::default()).expect("open");
        let before = state.clone();

        assert_eq!(
            open_app_by_id(&mut state, "doesnotexist", OpenAppOptions::default()),
            Err(DesktopError::UnknownApplication("doesnotexist".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn uncataloged_app_is_unknown() {
        let config = WindowLayoutConfig::default();
        let mut state = DesktopState::new(
            config,
            std::rc::Rc::new(AppCatalog::new(Vec::new())),
            Viewport {
                width: 1440,
                height: 900,
            },
        );

        assert_eq!(
            open_app(&mut state, AppId::Music, OpenAppOptions::default()),
            Err(DesktopError::UnknownApplication("music".to_string()))
        );
        assert!(state.registry.is_empty());
    }

    #[test]
    fn open_app_by_id_accepts_canonical_names() {
        let mut state = DesktopState::default();

        let id = open_app_by_id(&mut state, "calendar", OpenAppOptions::default()).expect("open");

        assert_eq!(state.registry.get(id).map(|w| w.app_id), Some(AppId::Calendar));
    }
}
