//! Application registry and launch entry point.
//!
//! The manager maps launch keys to static configs, instantiates each application lazily on its
//! first launch, and keeps that single instance for the rest of the session. Applications receive
//! a weak launcher handle, so the registry is the only owner of application instances.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use desktop_app_contract::{
    AppMountContext, Application, ApplicationConfig, ApplicationContext, ApplicationEvent,
    ApplicationKey, ApplicationLauncher, MenuEntry, SystemApis, WindowContext, WindowHost,
};
use leptos::logging;
use serde_json::Value;
use thiserror::Error;

use crate::{compositor::WindowCompositor, model::WindowRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors reported by fallible registry operations.
pub enum ManagerError {
    /// Another config already claimed the same launch key.
    #[error("application `{0}` is already registered")]
    DuplicateApplication(ApplicationKey),
    /// No config is registered under the requested key.
    #[error("no application is registered at `{0}`")]
    UnknownApplication(ApplicationKey),
    /// The launch path or config key is malformed.
    #[error("{0}")]
    InvalidLaunchPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle phase of one application as seen by the registry.
pub enum ApplicationPhase {
    /// No config is registered under the key.
    Unregistered,
    /// Registered but never launched.
    Registered,
    /// Instantiated with at least one open window.
    Active,
    /// Instantiated with no open window; the instance and its state are retained.
    Idle,
}

struct ManagerInner {
    compositor: WindowCompositor,
    apis: SystemApis,
    configs: RefCell<BTreeMap<ApplicationKey, &'static ApplicationConfig>>,
    instances: RefCell<BTreeMap<ApplicationKey, Rc<dyn Application>>>,
}

#[derive(Clone)]
/// Shared handle to the application registry.
pub struct ApplicationManager {
    inner: Rc<ManagerInner>,
}

impl std::fmt::Debug for ApplicationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationManager")
            .field("registered", &self.inner.configs.borrow().len())
            .field("instances", &self.instance_count())
            .finish()
    }
}

struct WeakLauncher(Weak<ManagerInner>);

impl ApplicationLauncher for WeakLauncher {
    fn open(&self, launch_path: &str, args: Value) {
        match self.0.upgrade() {
            Some(inner) => ApplicationManager { inner }.open(launch_path, args),
            None => logging::warn!("launch of `{launch_path}` after the desktop shut down"),
        }
    }
}

impl ApplicationManager {
    /// Creates an empty registry bound to `compositor`.
    pub fn new(compositor: WindowCompositor, apis: SystemApis) -> Self {
        Self {
            inner: Rc::new(ManagerInner {
                compositor,
                apis,
                configs: RefCell::new(BTreeMap::new()),
                instances: RefCell::new(BTreeMap::new()),
            }),
        }
    }

    /// Returns the compositor this registry launches into.
    pub fn compositor(&self) -> &WindowCompositor {
        &self.inner.compositor
    }

    /// Returns the system API facade handed to applications.
    pub fn apis(&self) -> &SystemApis {
        &self.inner.apis
    }

    /// Returns a launcher that does not keep the registry alive.
    pub fn launcher(&self) -> Rc<dyn ApplicationLauncher> {
        Rc::new(WeakLauncher(Rc::downgrade(&self.inner)))
    }

    /// Registers a config under its launch key.
    ///
    /// # Errors
    ///
    /// Fails when the key is malformed or already registered.
    pub fn register(&self, config: &'static ApplicationConfig) -> Result<(), ManagerError> {
        let key = ApplicationKey::new(config.path, config.app_name)
            .map_err(ManagerError::InvalidLaunchPath)?;
        let mut configs = self.inner.configs.borrow_mut();
        if configs.contains_key(&key) {
            return Err(ManagerError::DuplicateApplication(key));
        }
        configs.insert(key, config);
        Ok(())
    }

    /// Returns the config registered under `key`.
    pub fn config(&self, key: &ApplicationKey) -> Option<&'static ApplicationConfig> {
        self.inner.configs.borrow().get(key).copied()
    }

    /// Launches the application at `launch_path`; failures are logged and ignored.
    pub fn open(&self, launch_path: &str, args: Value) {
        if let Err(err) = self.try_open(launch_path, args) {
            logging::warn!("failed to open application: {err}");
        }
    }

    /// Launches the application at `path + app_name`; failures are logged and ignored.
    pub fn open_app(&self, path: &str, app_name: &str, args: Value) {
        let result = ApplicationKey::new(path, app_name)
            .map_err(ManagerError::InvalidLaunchPath)
            .and_then(|key| self.try_open_key(&key, args));
        if let Err(err) = result {
            logging::warn!("failed to open application: {err}");
        }
    }

    /// Launches the application at `launch_path` and returns its instance.
    ///
    /// # Errors
    ///
    /// Fails when the path is malformed or not registered. No window is created in that case.
    pub fn try_open(
        &self,
        launch_path: &str,
        args: Value,
    ) -> Result<Rc<dyn Application>, ManagerError> {
        let key = ApplicationKey::parse(launch_path).map_err(ManagerError::InvalidLaunchPath)?;
        self.try_open_key(&key, args)
    }

    fn try_open_key(
        &self,
        key: &ApplicationKey,
        args: Value,
    ) -> Result<Rc<dyn Application>, ManagerError> {
        let application = self.instantiate(key)?;
        application.on(ApplicationEvent::open(args), None);
        Ok(application)
    }

    fn instantiate(&self, key: &ApplicationKey) -> Result<Rc<dyn Application>, ManagerError> {
        if let Some(existing) = self.instance(key) {
            return Ok(existing);
        }
        let config = self
            .config(key)
            .ok_or_else(|| ManagerError::UnknownApplication(key.clone()))?;

        let context = ApplicationContext::new(
            Rc::new(self.inner.compositor.clone()),
            self.launcher(),
            self.inner.apis.clone(),
        );
        let application = (config.entrypoint)(context);
        self.inner
            .instances
            .borrow_mut()
            .insert(key.clone(), application.clone());
        logging::log!("instantiated application {key}");
        Ok(application)
    }

    /// Delivers `event` to the live instance registered under `key`.
    ///
    /// Events for applications that were never launched are dropped.
    pub fn dispatch(
        &self,
        key: &ApplicationKey,
        event: ApplicationEvent,
        window: Option<WindowContext>,
    ) {
        match self.instance(key) {
            Some(application) => application.on(event, window),
            None => logging::debug_warn!(
                "dropping `{}` event for application {key} with no live instance",
                event.kind()
            ),
        }
    }

    /// Delivers `event` to the application owning `window`, tagged with that window.
    ///
    /// Returns `false` when the window is no longer open.
    pub fn dispatch_to_window(&self, window: WindowContext, event: ApplicationEvent) -> bool {
        let Some(owner) = self
            .inner
            .compositor
            .window(window)
            .map(|record| record.owner)
        else {
            logging::debug_warn!("dropping `{}` event for closed window", event.kind());
            return false;
        };
        self.dispatch(&owner, event, Some(window));
        true
    }

    /// Delivers `event` to the application owning the focused window.
    pub fn dispatch_to_focused(&self, event: ApplicationEvent) -> bool {
        match self.inner.compositor.focused_window() {
            Some(window) => self.dispatch_to_window(window, event),
            None => false,
        }
    }

    /// Returns the live instance for `key`.
    pub fn instance(&self, key: &ApplicationKey) -> Option<Rc<dyn Application>> {
        self.inner.instances.borrow().get(key).cloned()
    }

    /// Returns the number of instantiated applications.
    pub fn instance_count(&self) -> usize {
        self.inner.instances.borrow().len()
    }

    /// Returns the lifecycle phase of the application registered under `key`.
    pub fn phase(&self, key: &ApplicationKey) -> ApplicationPhase {
        if self.config(key).is_none() {
            return ApplicationPhase::Unregistered;
        }
        if self.instance(key).is_none() {
            return ApplicationPhase::Registered;
        }
        if self.inner.compositor.windows_of(key).is_empty() {
            ApplicationPhase::Idle
        } else {
            ApplicationPhase::Active
        }
    }

    /// Returns every registered config ordered by dock priority, then display name.
    ///
    /// Configs without a priority sort after all prioritized ones.
    pub fn dock_entries(&self) -> Vec<&'static ApplicationConfig> {
        let mut entries: Vec<_> = self.inner.configs.borrow().values().copied().collect();
        entries.sort_by(|a, b| {
            (a.dock_priority.is_none(), a.dock_priority, a.display_name).cmp(&(
                b.dock_priority.is_none(),
                b.dock_priority,
                b.display_name,
            ))
        });
        entries
    }

    /// Returns the menu entries of the application owning the focused window.
    pub fn focused_menu_entries(&self) -> Vec<MenuEntry> {
        self.inner
            .compositor
            .focused_window()
            .and_then(|window| self.inner.compositor.window(window))
            .and_then(|record| self.instance(&record.owner))
            .map(|application| application.menu_entries())
            .unwrap_or_default()
    }

    /// Builds the mount context for a window's view; events it emits reach the owning
    /// application tagged with the window's context.
    pub fn mount_context(&self, record: &WindowRecord) -> AppMountContext {
        let manager = Rc::downgrade(&self.inner);
        let owner = record.owner.clone();
        let window = record.context();
        let emit = Rc::new(move |event: ApplicationEvent| {
            if let Some(inner) = manager.upgrade() {
                ApplicationManager { inner }.dispatch(&owner, event, Some(window));
            }
        });
        AppMountContext::new(
            record.owner.clone(),
            window,
            record.args.clone(),
            self.inner.apis.clone(),
            self.launcher(),
            emit,
        )
    }
}

impl ApplicationLauncher for ApplicationManager {
    fn open(&self, launch_path: &str, args: Value) {
        ApplicationManager::open(self, launch_path, args);
    }
}
