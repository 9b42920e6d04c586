//! Built-in application registration and launcher metadata.

use desktop_app_about::ABOUT_CONFIG;
use desktop_app_contact::CONTACT_CONFIG;
use desktop_app_contract::{ApplicationConfig, ApplicationKey};
use desktop_app_memes::MEMES_CONFIG;
use desktop_app_skills::SKILLS_CONFIG;
use desktop_app_snake::SNAKE_CONFIG;
use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::manager::ApplicationManager;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));
}

/// Static configs of every application shipped with the shell.
pub const BUILTIN_APPLICATIONS: [&ApplicationConfig; 5] = [
    &ABOUT_CONFIG,
    &CONTACT_CONFIG,
    &MEMES_CONFIG,
    &SKILLS_CONFIG,
    &SNAKE_CONFIG,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Launcher metadata for one application, read from its `app.manifest.toml`.
pub struct AppManifestEntry {
    pub schema_version: u32,
    pub path: String,
    pub app_name: String,
    pub display_name: String,
    pub runtime_contract_version: String,
    pub show_in_dock: bool,
    pub show_on_desktop: bool,
}

impl AppManifestEntry {
    pub fn key(&self) -> Result<ApplicationKey, String> {
        ApplicationKey::new(self.path.clone(), self.app_name.clone())
    }
}

/// Returns the build-time manifest catalog.
pub fn manifest_catalog() -> Vec<AppManifestEntry> {
    parse_catalog(generated::APP_MANIFEST_CATALOG_JSON)
}

fn parse_catalog(raw: &str) -> Vec<AppManifestEntry> {
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("app manifest catalog is unreadable: {err}");
            Vec::new()
        }
    }
}

/// Registers every built-in application with `manager`.
pub fn register_builtin_applications(manager: &ApplicationManager) {
    for config in BUILTIN_APPLICATIONS {
        if let Err(err) = manager.register(config) {
            logging::warn!("skipping built-in application: {err}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Launcher surface that lists applications.
pub enum LauncherSurface {
    /// Bottom dock.
    Dock,
    /// Desktop shortcut icons.
    Desktop,
}

/// Returns the registered configs to show on `surface`, in dock order.
///
/// Registered applications without a catalog entry are hidden; catalog entries without a
/// registered config are logged and skipped.
pub fn launcher_entries(
    manager: &ApplicationManager,
    catalog: &[AppManifestEntry],
    surface: LauncherSurface,
) -> Vec<&'static ApplicationConfig> {
    for entry in catalog {
        let registered = entry
            .key()
            .ok()
            .and_then(|key| manager.config(&key))
            .is_some();
        if !registered {
            logging::warn!(
                "manifest entry {}{} has no registered application",
                entry.path,
                entry.app_name
            );
        }
    }

    manager
        .dock_entries()
        .into_iter()
        .filter(|config| {
            catalog.iter().any(|entry| {
                entry.path == config.path
                    && entry.app_name == config.app_name
                    && match surface {
                        LauncherSurface::Dock => entry.show_in_dock,
                        LauncherSurface::Desktop => entry.show_on_desktop,
                    }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use desktop_app_contract::SystemApis;
    use platform_host::{HostServices, NoopTaskSpawner};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compositor::WindowCompositor;

    fn manager() -> ApplicationManager {
        let host = HostServices::headless();
        let manager = ApplicationManager::new(
            WindowCompositor::new(Rc::new(NoopTaskSpawner)),
            SystemApis::from_host(&host),
        );
        register_builtin_applications(&manager);
        manager
    }

    #[test]
    fn catalog_matches_builtin_configs() {
        let catalog = manifest_catalog();
        assert_eq!(catalog.len(), BUILTIN_APPLICATIONS.len());
        for config in BUILTIN_APPLICATIONS {
            let entry = catalog
                .iter()
                .find(|entry| entry.app_name == config.app_name)
                .expect("manifest for built-in application");
            assert_eq!(entry.path, config.path);
            assert_eq!(entry.display_name, config.display_name);
        }
    }

    #[test]
    fn dock_lists_prioritized_apps_first() {
        let manager = manager();
        let names: Vec<_> = launcher_entries(&manager, &manifest_catalog(), LauncherSurface::Dock)
            .iter()
            .map(|config| config.display_name)
            .collect();
        assert_eq!(names, vec!["About", "Contact", "Skills", "Memes", "Snake"]);
    }

    #[test]
    fn desktop_surface_follows_manifest_flags() {
        let manager = manager();
        let names: Vec<_> =
            launcher_entries(&manager, &manifest_catalog(), LauncherSurface::Desktop)
                .iter()
                .map(|config| config.display_name)
                .collect();
        assert_eq!(names, vec!["About", "Contact", "Skills"]);
    }

    #[test]
    fn unknown_catalog_entries_are_skipped() {
        let manager = manager();
        let catalog = parse_catalog(
            r#"[{"schema_version":1,"path":"/Applications/","app_name":"Ghost.app",
                "display_name":"Ghost","runtime_contract_version":"1.0",
                "show_in_dock":true,"show_on_desktop":true}]"#,
        );
        assert_eq!(catalog.len(), 1);
        assert!(launcher_entries(&manager, &catalog, LauncherSurface::Dock).is_empty());
        assert!(parse_catalog("not json").is_empty());
    }
}
