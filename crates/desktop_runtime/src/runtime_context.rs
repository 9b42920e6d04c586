//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived compositor and application registry, mirrors compositor
//! changes into a reactive window snapshot, and replays deep-link launches on boot. UI
//! composition stays in [`crate::components`].

use desktop_app_contract::{SystemApis, WindowContext};
use leptos::*;
use platform_host::HostServices;
use serde_json::Value;

use crate::{
    apps::{self, AppManifestEntry},
    compositor::WindowCompositor,
    deep_link,
    manager::ApplicationManager,
    model::WindowRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Active title-bar drag.
pub struct WindowDrag {
    /// Window being dragged.
    pub window: WindowContext,
    /// Pointer position when the drag started.
    pub pointer_origin: (i32, i32),
    /// Window position when the drag started.
    pub window_origin: (i32, i32),
}

impl WindowDrag {
    /// Returns the window position for the current pointer position.
    pub fn position_for(&self, pointer: (i32, i32)) -> (i32, i32) {
        (
            self.window_origin.0 + pointer.0 - self.pointer_origin.0,
            (self.window_origin.1 + pointer.1 - self.pointer_origin.1).max(0),
        )
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading the window snapshot and reaching the application registry.
pub struct DesktopRuntimeContext {
    /// Application registry; also owns the compositor.
    pub manager: StoredValue<ApplicationManager>,
    /// Launcher metadata from the build-time manifest catalog.
    pub catalog: StoredValue<Vec<AppManifestEntry>>,
    /// Open windows, bottom-most first, refreshed on every compositor change.
    pub windows: RwSignal<Vec<WindowRecord>>,
    /// Title-bar drag in progress.
    pub drag: RwSignal<Option<WindowDrag>>,
}

impl DesktopRuntimeContext {
    /// Returns a handle to the application registry.
    pub fn manager(&self) -> ApplicationManager {
        self.manager.get_value()
    }

    /// Returns a handle to the compositor.
    pub fn compositor(&self) -> WindowCompositor {
        self.manager.get_value().compositor().clone()
    }
}

/// Opens every launch path requested by the page URL.
pub fn open_deep_links(manager: &ApplicationManager, targets: &[String]) {
    for target in targets {
        manager.open(target, Value::Null);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and registers the built-in
/// applications.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let compositor = WindowCompositor::new(host_services.spawner.clone());
    let manager = ApplicationManager::new(compositor, SystemApis::from_host(&host_services));
    apps::register_builtin_applications(&manager);

    let windows = create_rw_signal(Vec::<WindowRecord>::new());
    let drag = create_rw_signal(None::<WindowDrag>);
    let stored_manager = store_value(manager.clone());

    let subscription = manager.compositor().subscribe(move |_| {
        let snapshot = stored_manager.get_value().compositor().windows();
        windows.set(snapshot);
        if let Some(active) = drag.get_untracked() {
            if stored_manager
                .get_value()
                .compositor()
                .window(active.window)
                .is_none()
            {
                drag.set(None);
            }
        }
    });
    on_cleanup(move || subscription.unsubscribe());

    let runtime = DesktopRuntimeContext {
        manager: stored_manager,
        catalog: store_value(apps::manifest_catalog()),
        windows,
        drag,
    };
    provide_context(runtime);

    open_deep_links(&manager, &deep_link::current_open_targets());
    logging::log!(
        "desktop shell booted with {} applications",
        manager.dock_entries().len()
    );

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_offsets_window_by_pointer_delta_and_keeps_title_bar_reachable() {
        let drag = WindowDrag {
            window: WindowContext::new(1),
            pointer_origin: (100, 100),
            window_origin: (40, 60),
        };
        assert_eq!(drag.position_for((130, 90)), (70, 50));
        assert_eq!(drag.position_for((0, 0)), (-60, 0));
    }
}
