//! Global keyboard shortcuts.

use crate::model::DesktopState;
use crate::reducer::DesktopAction;

/// Browser-independent view of a `keydown` event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// `KeyboardEvent.key`, e.g. `"m"` or `"Escape"`.
    pub key: String,
    /// `KeyboardEvent.code`, e.g. `"Space"`.
    pub code: String,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyChord {
    pub fn new(key: &str, code: &str) -> Self {
        Self {
            key: key.to_string(),
            code: code.to_string(),
            ..Self::default()
        }
    }

    pub fn with_command(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Cmd on macOS keyboards, Ctrl elsewhere.
    fn command(&self) -> bool {
        self.meta || self.ctrl
    }
}

/// Maps a key chord to the action it triggers in the current state, if any.
pub fn resolve_shortcut(chord: &KeyChord, state: &DesktopState) -> Option<DesktopAction> {
    if chord.command() && chord.code == "Space" {
        return Some(DesktopAction::ToggleSpotlight);
    }
    if chord.command() && chord.key.eq_ignore_ascii_case("m") {
        return state
            .registry
            .topmost_visible()
            .map(|_| DesktopAction::MinimizeTopmost);
    }
    if chord.key == "Escape" && state.spotlight.open {
        return Some(DesktopAction::SetSpotlightOpen { open: false });
    }
    None
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::launcher::open_app;
    use crate::model::OpenAppOptions;

    #[test]
    fn command_or_ctrl_space_toggles_spotlight() {
        let state = DesktopState::default();

        for chord in [
            KeyChord::new(" ", "Space").with_command(),
            KeyChord::new(" ", "Space").with_ctrl(),
        ] {
            assert_eq!(
                resolve_shortcut(&chord, &state),
                Some(DesktopAction::ToggleSpotlight)
            );
        }
        assert_eq!(resolve_shortcut(&KeyChord::new(" ", "Space"), &state), None);
    }

    #[test]
    fn command_m_needs_a_visible_window() {
        let mut state = DesktopState::default();
        let chord = KeyChord::new("M", "KeyM").with_command();
        assert_eq!(resolve_shortcut(&chord, &state), None);

        open_app(&mut state, AppId::Notes, OpenAppOptions::default()).expect("open notes");

        assert_eq!(
            resolve_shortcut(&chord, &state),
            Some(DesktopAction::MinimizeTopmost)
        );
    }

    #[test]
    fn escape_only_closes_an_open_spotlight() {
        let mut state = DesktopState::default();
        let escape = KeyChord::new("Escape", "Escape");
        assert_eq!(resolve_shortcut(&escape, &state), None);

        state.spotlight.set_open(true);

        assert_eq!(
            resolve_shortcut(&escape, &state),
            Some(DesktopAction::SetSpotlightOpen { open: false })
        );
    }
}
