//! Dock tiles and click semantics.

use desktop_app_contract::AppId;

use crate::apps::AppCatalog;
use crate::model::WindowId;
use crate::window_manager::WindowRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub app_id: AppId,
    pub name: String,
    pub icon: String,
    pub accent: String,
    /// At least one window exists for the app.
    pub running: bool,
    /// At least one of its windows is painted.
    pub visible: bool,
}

/// What a dock click resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockActivation {
    Focus(WindowId),
    Minimize(WindowId),
    Launch(AppId),
}

/// One tile per catalog app, in catalog order.
pub fn dock_items(catalog: &AppCatalog, registry: &WindowRegistry) -> Vec<DockItem> {
    catalog
        .definitions()
        .iter()
        .map(|def| {
            let mut windows = registry.windows().iter().filter(|w| w.app_id == def.id);
            let running = windows.clone().next().is_some();
            let visible = windows.any(|w| w.is_visible());
            DockItem {
                app_id: def.id,
                name: def.name.clone(),
                icon: def.icon.clone(),
                accent: def.accent.clone(),
                running,
                visible,
            }
        })
        .collect()
}

/// Resolves a dock click against the app's first window.
///
/// A minimized or hidden window is restored; a painted one is minimized; no window launches the
/// app.
pub fn dock_activation(registry: &WindowRegistry, app_id: AppId) -> DockActivation {
    match registry.find_by_app(app_id) {
        Some(window) if window.is_visible() => DockActivation::Minimize(window.id),
        Some(window) => DockActivation::Focus(window.id),
        None => DockActivation::Launch(app_id),
    }
}
