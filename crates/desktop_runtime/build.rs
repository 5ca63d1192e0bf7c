use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;
const MIN_WINDOW_WIDTH: i32 = 380;
const MIN_WINDOW_HEIGHT: i32 = 280;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DefaultSize {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    name: String,
    description: String,
    icon: String,
    accent: String,
    singleton: bool,
    default_size: DefaultSize,
    #[serde(default)]
    menu_items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AppCatalogFile {
    schema_version: u32,
    apps: Vec<AppEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "app catalog schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        if !seen.insert(app.id.clone()) {
            panic!("duplicate app id `{}` in {}", app.id, path.display());
        }
        if app.default_size.width < MIN_WINDOW_WIDTH || app.default_size.height < MIN_WINDOW_HEIGHT
        {
            panic!(
                "app `{}` default size {}x{} is below the {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT} window minimum",
                app.id, app.default_size.width, app.default_size.height
            );
        }
    }

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
