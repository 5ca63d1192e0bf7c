//! App catalog and app-module registry.
//!
//! Catalog metadata comes from `app_catalog.toml`, validated by the build script and embedded as
//! JSON. Each [`AppId`] is bound to exactly one mount function here.

mod placeholders;

use std::{rc::Rc, sync::OnceLock};

use desktop_app_contract::{AppDefinition, AppId, AppModule};

use crate::model::WindowSize;
use crate::shell::SpotlightDocument;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Read-only registry of launchable applications, in dock order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCatalog {
    definitions: Vec<AppDefinition>,
}

impl AppCatalog {
    pub fn new(definitions: Vec<AppDefinition>) -> Self {
        Self { definitions }
    }

    /// Decodes a catalog from the JSON array form emitted by the build script.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::new)
    }

    pub fn definitions(&self) -> &[AppDefinition] {
        &self.definitions
    }

    pub fn get(&self, app_id: AppId) -> Option<&AppDefinition> {
        self.definitions.iter().find(|def| def.id == app_id)
    }

    pub fn name_of(&self, app_id: AppId) -> Option<&str> {
        self.get(app_id).map(|def| def.name.as_str())
    }
}

fn builtin_definitions() -> &'static [AppDefinition] {
    static CATALOG: OnceLock<Vec<AppDefinition>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_CATALOG_JSON).expect("generated app catalog should parse")
    })
}

/// Returns the generated app catalog JSON payload.
pub fn builtin_catalog_json() -> &'static str {
    APP_CATALOG_JSON
}

/// Shared handle to the built-in catalog.
pub fn builtin_catalog() -> Rc<AppCatalog> {
    Rc::new(AppCatalog::new(builtin_definitions().to_vec()))
}

/// Default window size declared by a catalog entry.
pub fn default_window_size(definition: &AppDefinition) -> WindowSize {
    WindowSize {
        width: definition.default_size.width,
        height: definition.default_size.height,
    }
}

/// Searchable notes, mail and events backing the placeholder apps.
pub fn builtin_spotlight_documents() -> Vec<SpotlightDocument> {
    let notes = placeholders::SAMPLE_NOTES
        .iter()
        .map(|(id, title, content)| SpotlightDocument::note(id, title, content));
    let mail = placeholders::SAMPLE_MAIL
        .iter()
        .map(|(id, subject, from)| SpotlightDocument::mail(id, subject, from));
    let events = placeholders::SAMPLE_EVENTS
        .iter()
        .map(|(id, title, date, time)| SpotlightDocument::event(id, title, date, time));
    notes.chain(mail).chain(events).collect()
}

/// Resolves the mount function for `app_id`.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Finder => AppModule::new(placeholders::mount_finder),
        AppId::Safari => AppModule::new(placeholders::mount_safari),
        AppId::Notes => AppModule::new(placeholders::mount_notes),
        AppId::Calendar => AppModule::new(placeholders::mount_calendar),
        AppId::Mail => AppModule::new(placeholders::mount_mail),
        AppId::Photos => AppModule::new(placeholders::mount_photos),
        AppId::Terminal => AppModule::new(placeholders::mount_terminal),
        AppId::Settings => AppModule::new(placeholders::mount_settings),
        AppId::Music => AppModule::new(placeholders::mount_music),
        AppId::Messages => AppModule::new(placeholders::mount_messages),
        AppId::Preview => AppModule::new(placeholders::mount_preview),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_lists_every_app_once_in_dock_order() {
        let catalog = builtin_catalog();
        let ids: Vec<AppId> = catalog.definitions().iter().map(|def| def.id).collect();

        assert_eq!(ids, AppId::ALL.to_vec());
    }

    #[test]
    fn builtin_catalog_marks_singletons() {
        let catalog = builtin_catalog();
        let singleton = |id| catalog.get(id).map(|def| def.singleton);

        assert_eq!(singleton(AppId::Notes), Some(true));
        assert_eq!(singleton(AppId::Settings), Some(true));
        assert_eq!(singleton(AppId::Finder), Some(false));
        assert_eq!(singleton(AppId::Terminal), Some(false));
    }

    #[test]
    fn builtin_default_sizes_respect_window_minimum() {
        for def in builtin_catalog().definitions() {
            let size = default_window_size(def);
            assert!(size.width >= crate::config::MIN_WINDOW_WIDTH, "{}", def.id);
            assert!(size.height >= crate::config::MIN_WINDOW_HEIGHT, "{}", def.id);
        }
    }

    #[test]
    fn from_json_round_trips_generated_payload() {
        let catalog = AppCatalog::from_json(builtin_catalog_json()).expect("parse catalog");

        assert_eq!(catalog.name_of(AppId::Settings), Some("System Settings"));
        assert_eq!(&catalog, builtin_catalog().as_ref());
    }

    #[test]
    fn builtin_documents_cover_notes_mail_and_events() {
        let documents = builtin_spotlight_documents();
        let apps: Vec<AppId> = documents.iter().map(|doc| doc.app_id).collect();

        assert_eq!(documents.len(), 9);
        assert_eq!(apps[0], AppId::Notes);
        assert_eq!(apps[3], AppId::Mail);
        assert_eq!(apps[8], AppId::Calendar);
        assert_eq!(documents[3].subtitle, "From Priya Shah");
        assert_eq!(documents[6].subtitle, "2026-10-19 • 9:30 AM");
    }
}
