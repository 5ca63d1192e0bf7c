//! Spotlight overlay state and search.
//!
//! Apps always rank before indexed documents; within each group the source order is kept.

use desktop_app_contract::AppId;
use serde::{Deserialize, Serialize};

use crate::apps::AppCatalog;

const DOCUMENT_SUBTITLE_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpotlightState {
    pub open: bool,
    pub query: String,
}

impl SpotlightState {
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.query.clear();
        }
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }
}

/// Searchable record supplied by an app's data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotlightDocument {
    /// Unique across all registered documents, e.g. `note-3`.
    pub key: String,
    pub title: String,
    pub subtitle: String,
    /// Extra text matched besides the title.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// App opened when the result is activated.
    pub app_id: AppId,
}

impl SpotlightDocument {
    pub fn note(id: impl std::fmt::Display, title: &str, content: &str) -> Self {
        Self {
            key: format!("note-{id}"),
            title: title.to_string(),
            subtitle: content.chars().take(DOCUMENT_SUBTITLE_CHARS).collect(),
            keywords: vec![content.to_string()],
            app_id: AppId::Notes,
        }
    }

    pub fn mail(id: impl std::fmt::Display, subject: &str, from: &str) -> Self {
        Self {
            key: format!("mail-{id}"),
            title: subject.to_string(),
            subtitle: format!("From {from}"),
            keywords: vec![from.to_string()],
            app_id: AppId::Mail,
        }
    }

    pub fn event(id: impl std::fmt::Display, title: &str, date: &str, time: &str) -> Self {
        Self {
            key: format!("event-{id}"),
            title: title.to_string(),
            subtitle: format!("{date} • {time}"),
            keywords: Vec::new(),
            app_id: AppId::Calendar,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        contains_folded(&self.title, needle)
            || self
                .keywords
                .iter()
                .any(|keyword| contains_folded(keyword, needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightResult {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub app_id: AppId,
}

/// Inserts or replaces documents by key, keeping first-registration order.
pub fn register_documents(index: &mut Vec<SpotlightDocument>, documents: Vec<SpotlightDocument>) {
    for document in documents {
        match index.iter_mut().find(|existing| existing.key == document.key) {
            Some(existing) => *existing = document,
            None => index.push(document),
        }
    }
}

/// Empty query lists every app; otherwise case-insensitive substring matching.
pub fn search(
    catalog: &AppCatalog,
    documents: &[SpotlightDocument],
    query: &str,
) -> Vec<SpotlightResult> {
    let app_result = |def: &desktop_app_contract::AppDefinition| SpotlightResult {
        key: format!("app-{}", def.id),
        title: def.name.clone(),
        subtitle: def.description.clone(),
        app_id: def.id,
    };

    if query.is_empty() {
        return catalog.definitions().iter().map(app_result).collect();
    }

    let needle = query.to_lowercase();
    let apps = catalog
        .definitions()
        .iter()
        .filter(|def| contains_folded(&def.name, &needle) || contains_folded(&def.description, &needle))
        .map(app_result);
    let docs = documents
        .iter()
        .filter(|doc| doc.matches(&needle))
        .map(|doc| SpotlightResult {
            key: doc.key.clone(),
            title: doc.title.clone(),
            subtitle: doc.subtitle.clone(),
            app_id: doc.app_id,
        });
    apps.chain(docs).collect()
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
