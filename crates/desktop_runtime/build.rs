use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    path: String,
    app_name: String,
    display_name: String,
    runtime_contract_version: String,
    show_in_dock: bool,
    show_on_desktop: bool,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    ["about", "contact", "memes", "skills", "snake"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn validate(path: &Path, manifest: &AppManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if !manifest.runtime_contract_version.starts_with("1.") {
        panic!(
            "runtime contract mismatch in {}: expected 1.x found {}",
            path.display(),
            manifest.runtime_contract_version
        );
    }
    if !manifest.path.starts_with('/') || !manifest.path.ends_with('/') {
        panic!(
            "invalid mount path `{}` in {}",
            manifest.path,
            path.display()
        );
    }
    if !manifest.app_name.ends_with(".app") || manifest.app_name.contains('/') {
        panic!(
            "invalid app name `{}` in {}",
            manifest.app_name,
            path.display()
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut launch_paths = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        let launch_path = format!("{}{}", manifest.path, manifest.app_name);
        if !launch_paths.insert(launch_path.clone()) {
            panic!("duplicate launch path `{launch_path}` in {}", path.display());
        }
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| (&a.path, &a.app_name).cmp(&(&b.path, &b.app_name)));
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
