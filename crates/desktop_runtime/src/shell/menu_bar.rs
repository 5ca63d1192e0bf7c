//! Menu bar labels derived from the active application.

use desktop_app_contract::AppId;

use crate::apps::AppCatalog;

/// Entries of the system menu behind the logo.
pub const APPLE_MENU_ITEMS: [&str; 4] =
    ["About This Mac", "System Settings", "App Store", "Recent Items"];

const FALLBACK_APP: AppId = AppId::Finder;
const FALLBACK_APP_NAME: &str = "Finder";
const FALLBACK_MENU_ITEM: &str = "About This App";

/// Name shown next to the logo; Finder owns the bar when nothing is active.
pub fn active_app_name(catalog: &AppCatalog, active_app_id: Option<AppId>) -> String {
    active_app_id
        .and_then(|id| catalog.name_of(id))
        .unwrap_or(FALLBACK_APP_NAME)
        .to_string()
}

/// Menu entries for the active app, or Finder's when nothing is active.
pub fn menu_items(catalog: &AppCatalog, active_app_id: Option<AppId>) -> Vec<String> {
    let app_id = active_app_id.unwrap_or(FALLBACK_APP);
    match catalog.get(app_id) {
        Some(def) if !def.menu_items.is_empty() => def.menu_items.clone(),
        _ => vec![FALLBACK_MENU_ITEM.to_string()],
    }
}

/// Bell glyph reflecting whether notifications are pending.
pub fn notification_glyph(pending: bool) -> &'static str {
    if pending {
        "🔔"
    } else {
        "🔕"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::builtin_catalog;

    #[test]
    fn falls_back_to_finder_when_nothing_is_active() {
        let catalog = builtin_catalog();

        assert_eq!(active_app_name(&catalog, None), "Finder");
        assert_eq!(menu_items(&catalog, None)[0], "About Finder");
        assert_eq!(
            active_app_name(&catalog, Some(AppId::Settings)),
            "System Settings"
        );
    }

    #[test]
    fn apps_without_menu_entries_get_about_item() {
        let mut definitions = builtin_catalog().definitions().to_vec();
        for def in &mut definitions {
            def.menu_items.clear();
        }
        let catalog = AppCatalog::new(definitions);

        assert_eq!(
            menu_items(&catalog, Some(AppId::Music)),
            vec!["About This App".to_string()]
        );
        assert_eq!(
            active_app_name(&AppCatalog::new(Vec::new()), Some(AppId::Music)),
            "Finder"
        );
    }
}
