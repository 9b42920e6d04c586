//! Shared contract types between the desktop window compositor, the application registry, and
//! the applications it hosts.
//!
//! Applications are addressed by an [`ApplicationKey`] (a mount path plus an app name), describe
//! themselves through a static [`ApplicationConfig`], and react to [`ApplicationEvent`]s by
//! asking a [`WindowHost`] to open, focus, or close windows. Cross-application navigation goes
//! through an [`ApplicationLauncher`]; neither seam lets one application reach into another.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod testing;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::View;
use platform_host::{HostServices, HttpService, ScreenResolution, ScreenService};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a compositor-managed window.
pub type WindowRuntimeId = u64;

/// Event kind that asks an application to present itself.
pub const APPLICATION_OPEN_KIND: &str = "application-open";
/// Event kind that asks an application to close one or all of its windows.
pub const APPLICATION_CLOSE_KIND: &str = "application-close";

/// Viewport assumed for placement before the host has measured the screen.
pub const FALLBACK_VIEWPORT: ScreenResolution = ScreenResolution::new(1280, 800);

/// Launch address of an application: a mount path plus an app name unique within it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationKey {
    path: String,
    app_name: String,
}

impl ApplicationKey {
    /// Returns a key when `path` is a `/`-delimited namespace and `app_name` is a `*.app` name.
    pub fn new(path: impl Into<String>, app_name: impl Into<String>) -> Result<Self, String> {
        let path = path.into();
        let app_name = app_name.into();
        if !is_valid_mount_path(&path) {
            return Err(format!(
                "invalid application path `{path}`; expected a namespace like `/Applications/`"
            ));
        }
        if !is_valid_app_name(&app_name) {
            return Err(format!(
                "invalid application name `{app_name}`; expected a name like `About.app`"
            ));
        }
        Ok(Self { path, app_name })
    }

    /// Splits a full launch path such as `/Applications/About.app` at its last `/`.
    pub fn parse(launch_path: &str) -> Result<Self, String> {
        let launch_path = launch_path.trim();
        let Some(split) = launch_path.rfind('/') else {
            return Err(format!(
                "invalid launch path `{launch_path}`; expected `<path>/<name>.app`"
            ));
        };
        let (path, app_name) = launch_path.split_at(split + 1);
        Self::new(path, app_name)
    }

    /// Creates a key without validation for compile-time trusted constants.
    pub fn trusted(path: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            app_name: app_name.into(),
        }
    }

    /// Returns the mount namespace, including leading and trailing `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the app name within the namespace.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the full launch path (`path + app_name`).
    pub fn launch_path(&self) -> String {
        format!("{}{}", self.path, self.app_name)
    }
}

impl std::fmt::Display for ApplicationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.path, self.app_name)
    }
}

fn is_valid_mount_path(raw: &str) -> bool {
    if raw.len() > 120 || !raw.starts_with('/') || !raw.ends_with('/') {
        return false;
    }
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .all(|segment| {
            segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
        })
}

fn is_valid_app_name(raw: &str) -> bool {
    let Some(stem) = raw.strip_suffix(".app") else {
        return false;
    };
    !stem.is_empty()
        && raw.len() <= 64
        && !raw.contains('/')
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Icon reference shown by the dock and window title bars.
pub struct AppIcon {
    /// Image source.
    pub src: &'static str,
    /// Accessible label.
    pub alt: &'static str,
}

/// Factory that builds an application instance from its runtime collaborators.
pub type ApplicationEntrypoint = fn(ApplicationContext) -> Rc<dyn Application>;

#[derive(Clone, Copy)]
/// Immutable per-variant application configuration.
pub struct ApplicationConfig {
    /// Human-readable name for the dock and menu bar.
    pub display_name: &'static str,
    /// Dock ordering hint; lower values come first, `None` sorts after all prioritized apps.
    pub dock_priority: Option<u32>,
    /// Mount namespace such as `/Applications/`.
    pub path: &'static str,
    /// Unique name within `path`, such as `About.app`.
    pub app_name: &'static str,
    /// Dock icon.
    pub app_icon: AppIcon,
    /// Instance factory invoked lazily on first launch.
    pub entrypoint: ApplicationEntrypoint,
}

impl ApplicationConfig {
    /// Returns the registry key for this application.
    pub fn key(&self) -> ApplicationKey {
        ApplicationKey::trusted(self.path, self.app_name)
    }

    /// Returns the full launch path (`path + app_name`).
    pub fn launch_path(&self) -> String {
        format!("{}{}", self.path, self.app_name)
    }
}

impl std::fmt::Debug for ApplicationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationConfig")
            .field("display_name", &self.display_name)
            .field("dock_priority", &self.dock_priority)
            .field("path", &self.path)
            .field("app_name", &self.app_name)
            .field("app_icon", &self.app_icon)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Application-specific event kind and payload, interpreted only by the declaring application.
pub struct CustomEvent {
    /// Kebab-case kind tag.
    pub kind: String,
    /// Opaque payload.
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawApplicationEvent", into = "RawApplicationEvent")]
/// Tagged message delivered to [`Application::on`].
///
/// `kind` is the only dispatch discriminator. Handlers must treat kinds they do not know as
/// no-ops.
pub enum ApplicationEvent {
    /// `application-open`: present the application, with an opaque launch payload.
    Open {
        /// Launch payload supplied by the caller of the launcher.
        args: Value,
    },
    /// `application-close`: close the addressed window, or every window when none is given.
    Close,
    /// Any kind declared by an application for itself.
    Custom(CustomEvent),
}

impl ApplicationEvent {
    /// Creates an `application-open` event.
    pub fn open(args: Value) -> Self {
        Self::Open { args }
    }

    /// Creates an event of `kind`; the reserved system kinds map onto their own variants.
    pub fn custom(kind: impl Into<String>, payload: Value) -> Self {
        RawApplicationEvent {
            kind: kind.into(),
            args: payload.clone(),
            payload,
        }
        .into()
    }

    /// Returns the kind tag.
    pub fn kind(&self) -> &str {
        match self {
            Self::Open { .. } => APPLICATION_OPEN_KIND,
            Self::Close => APPLICATION_CLOSE_KIND,
            Self::Custom(custom) => &custom.kind,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawApplicationEvent {
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    args: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

impl From<RawApplicationEvent> for ApplicationEvent {
    fn from(raw: RawApplicationEvent) -> Self {
        match raw.kind.as_str() {
            APPLICATION_OPEN_KIND => Self::Open { args: raw.args },
            APPLICATION_CLOSE_KIND => Self::Close,
            _ => Self::Custom(CustomEvent {
                kind: raw.kind,
                payload: raw.payload,
            }),
        }
    }
}

impl From<ApplicationEvent> for RawApplicationEvent {
    fn from(event: ApplicationEvent) -> Self {
        match event {
            ApplicationEvent::Open { args } => Self {
                kind: APPLICATION_OPEN_KIND.to_string(),
                args,
                payload: Value::Null,
            },
            ApplicationEvent::Close => Self {
                kind: APPLICATION_CLOSE_KIND.to_string(),
                args: Value::Null,
                payload: Value::Null,
            },
            ApplicationEvent::Custom(custom) => Self {
                kind: custom.kind,
                args: Value::Null,
                payload: custom.payload,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Opaque handle correlating an event with the window that produced or should receive it.
pub struct WindowContext {
    window_id: WindowRuntimeId,
}

impl WindowContext {
    /// Wraps a compositor window id.
    pub const fn new(window_id: WindowRuntimeId) -> Self {
        Self { window_id }
    }

    /// Returns the compositor window id.
    pub const fn window_id(self) -> WindowRuntimeId {
        self.window_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in layout units.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect moved to `(x, y)`.
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Returns the rect with its size raised to at least `min_w` x `min_h`.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Places a `width` x `height` window `top` units from the top, centered horizontally.
///
/// On mobile viewports the window spans the full viewport width from `x = 0` and is shortened to
/// fit below `top`. Before the first measurement [`FALLBACK_VIEWPORT`] is assumed.
pub fn centered_window_rect(
    resolution: Option<ScreenResolution>,
    width: i32,
    height: i32,
    top: i32,
) -> WindowRect {
    let viewport = resolution.unwrap_or(FALLBACK_VIEWPORT);
    let viewport_w = i32::try_from(viewport.width).unwrap_or(i32::MAX);
    let viewport_h = i32::try_from(viewport.height).unwrap_or(i32::MAX);

    if viewport.is_mobile_device() {
        return WindowRect {
            x: 0,
            y: top,
            w: viewport_w,
            h: height.min((viewport_h - top).max(0)),
        };
    }

    WindowRect {
        x: ((viewport_w - width) / 2).max(0),
        y: top,
        w: width,
        h: height,
    }
}

/// Future produced by a [`ViewGenerator`].
pub type ViewLoadFuture = LocalBoxFuture<'static, Result<AppModule, String>>;

#[derive(Clone)]
/// Deferred, possibly asynchronous resolver for a window's view.
///
/// The compositor resolves the generator after the window exists and cancels the resolution if
/// the window closes first.
pub struct ViewGenerator {
    resolve: Rc<dyn Fn(WindowContext) -> ViewLoadFuture>,
}

impl ViewGenerator {
    /// Creates a generator from a resolver function.
    pub fn new(resolve: impl Fn(WindowContext) -> ViewLoadFuture + 'static) -> Self {
        Self {
            resolve: Rc::new(resolve),
        }
    }

    /// Creates a generator that resolves immediately to `module`.
    pub fn ready(module: AppModule) -> Self {
        Self::new(move |_| {
            let module = module.clone();
            Box::pin(async move { Ok(module) })
        })
    }

    /// Starts resolving the view for `window`.
    pub fn resolve(&self, window: WindowContext) -> ViewLoadFuture {
        (self.resolve)(window)
    }
}

impl PartialEq for ViewGenerator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.resolve, &other.resolve)
    }
}

impl std::fmt::Debug for ViewGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ViewGenerator")
    }
}

#[derive(Clone)]
/// Mountable view produced by a resolved [`ViewGenerator`].
pub struct AppModule {
    mount_fn: Rc<dyn Fn(AppMountContext) -> View>,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub fn new(mount_fn: impl Fn(AppMountContext) -> View + 'static) -> Self {
        Self {
            mount_fn: Rc::new(mount_fn),
        }
    }

    /// Mounts the view with a runtime-provided context.
    pub fn mount(&self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

impl PartialEq for AppModule {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.mount_fn, &other.mount_fn)
    }
}

impl std::fmt::Debug for AppModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppModule")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Everything an application needs to request one window.
pub struct OpenWindowRequest {
    /// Caller-chosen placement; the compositor does not auto-tile.
    pub rect: WindowRect,
    /// Title bar text.
    pub title: String,
    /// Requesting application.
    pub owner: ApplicationKey,
    /// Opaque launch payload handed to the view.
    pub args: Value,
    /// View resolver.
    pub generator: ViewGenerator,
}

impl OpenWindowRequest {
    /// Creates a request with a `null` launch payload.
    pub fn new(
        owner: ApplicationKey,
        title: impl Into<String>,
        rect: WindowRect,
        generator: ViewGenerator,
    ) -> Self {
        Self {
            rect,
            title: title.into(),
            owner,
            args: Value::Null,
            generator,
        }
    }

    /// Attaches a launch payload.
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = args;
        self
    }
}

/// Window operations exposed to applications.
///
/// Closing or focusing a context that is no longer open is a no-op.
pub trait WindowHost {
    /// Creates a window and returns its context.
    fn open(&self, request: OpenWindowRequest) -> WindowContext;

    /// Closes `window` if it is still open.
    fn close(&self, window: WindowContext);

    /// Raises and focuses `window` if it is still open.
    fn focus(&self, window: WindowContext);

    /// Returns the open windows owned by `owner`, bottom-most first.
    fn windows_of(&self, owner: &ApplicationKey) -> Vec<WindowContext>;

    /// Closes every window owned by `owner`.
    fn close_all(&self, owner: &ApplicationKey);
}

/// Launch-by-path seam used by the shell and by applications for cross-app navigation.
pub trait ApplicationLauncher {
    /// Opens the application at `launch_path` with `args`; unknown paths are logged and ignored.
    fn open(&self, launch_path: &str, args: Value);
}

#[derive(Clone)]
/// System API facade handed to applications and their views.
pub struct SystemApis {
    /// Viewport classification broadcaster.
    pub screen: ScreenService,
    /// Network access.
    pub http: Rc<dyn HttpService>,
}

impl SystemApis {
    /// Creates the facade from explicit services.
    pub fn new(screen: ScreenService, http: Rc<dyn HttpService>) -> Self {
        Self { screen, http }
    }

    /// Creates the facade from a host bundle.
    pub fn from_host(host: &HostServices) -> Self {
        Self::new(host.screen.clone(), host.http.clone())
    }
}

#[derive(Clone)]
/// Collaborators injected into an application by its [`ApplicationEntrypoint`].
pub struct ApplicationContext {
    /// Window operations.
    pub compositor: Rc<dyn WindowHost>,
    /// Cross-application launcher.
    pub launcher: Rc<dyn ApplicationLauncher>,
    /// System API facade.
    pub apis: SystemApis,
}

impl ApplicationContext {
    /// Creates an application context.
    pub fn new(
        compositor: Rc<dyn WindowHost>,
        launcher: Rc<dyn ApplicationLauncher>,
        apis: SystemApis,
    ) -> Self {
        Self {
            compositor,
            launcher,
            apis,
        }
    }
}

#[derive(Clone)]
/// Per-window context handed to a mounted view.
pub struct AppMountContext {
    /// Owning application.
    pub app_key: ApplicationKey,
    /// Window hosting the view.
    pub window: WindowContext,
    /// Launch payload supplied at open time.
    pub args: Value,
    /// System API facade.
    pub apis: SystemApis,
    /// Cross-application launcher.
    pub launcher: Rc<dyn ApplicationLauncher>,
    emit: Rc<dyn Fn(ApplicationEvent)>,
}

impl AppMountContext {
    /// Creates a mount context; `emit` must route events to the owning application for `window`.
    pub fn new(
        app_key: ApplicationKey,
        window: WindowContext,
        args: Value,
        apis: SystemApis,
        launcher: Rc<dyn ApplicationLauncher>,
        emit: Rc<dyn Fn(ApplicationEvent)>,
    ) -> Self {
        Self {
            app_key,
            window,
            args,
            apis,
            launcher,
            emit,
        }
    }

    /// Sends `event` to the owning application, tagged with this window's context.
    pub fn emit(&self, event: ApplicationEvent) {
        (self.emit)(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Rendering hints for a menu entry.
pub struct MenuDisplayOptions {
    /// Render the entry title in bold (used for the application-name entry).
    pub bold_text: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One selectable menu command.
pub struct MenuItem {
    /// Label text.
    pub label: String,
    /// Event dispatched to the active application when the item is chosen.
    pub event: ApplicationEvent,
}

impl MenuItem {
    /// Creates a menu item.
    pub fn new(label: impl Into<String>, event: ApplicationEvent) -> Self {
        Self {
            label: label.into(),
            event,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Top-level menu bar entry rendered while the application is active.
pub struct MenuEntry {
    /// Entry title.
    pub name: String,
    /// Rendering hints.
    pub display_options: MenuDisplayOptions,
    /// Commands in display order.
    pub items: Vec<MenuItem>,
}

impl MenuEntry {
    /// Creates the bold application-name entry.
    pub fn app_name(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            display_options: MenuDisplayOptions { bold_text: true },
            items,
        }
    }

    /// Creates a regular entry.
    pub fn group(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            display_options: MenuDisplayOptions::default(),
            items,
        }
    }
}

/// Polymorphic application behavior unit.
pub trait Application {
    /// Returns the variant's static configuration.
    fn config(&self) -> &'static ApplicationConfig;

    /// Returns the menu bar entries shown while this application is active.
    fn menu_entries(&self) -> Vec<MenuEntry>;

    /// Handles one event, optionally correlated with the window it concerns.
    ///
    /// Implementations call [`handle_base_event`] first and must ignore unknown kinds.
    fn on(&self, event: ApplicationEvent, window: Option<WindowContext>);
}

/// Handles the kinds every application treats the same way.
///
/// `application-close` closes the addressed window, or every window of the application when no
/// context is given. Other kinds are left to the variant.
pub fn handle_base_event(
    compositor: &dyn WindowHost,
    config: &ApplicationConfig,
    event: &ApplicationEvent,
    window: Option<WindowContext>,
) {
    match (event, window) {
        (ApplicationEvent::Close, Some(window)) => compositor.close(window),
        (ApplicationEvent::Close, None) => compositor.close_all(&config.key()),
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How an application reacts to `application-open` while it already has a window.
pub enum WindowPolicy {
    /// Focus the newest existing window instead of opening another.
    SingleWindow,
    /// Open a new window for every request.
    MultiWindow,
}

/// Opens a window built by `request`, or focuses the newest existing one under
/// [`WindowPolicy::SingleWindow`].
pub fn open_with_policy(
    compositor: &dyn WindowHost,
    owner: &ApplicationKey,
    policy: WindowPolicy,
    request: impl FnOnce() -> OpenWindowRequest,
) -> WindowContext {
    if policy == WindowPolicy::SingleWindow {
        if let Some(existing) = compositor.windows_of(owner).last().copied() {
            compositor.focus(existing);
            return existing;
        }
    }
    compositor.open(request())
}

#[cfg(test)]
mod tests {
    use leptos::IntoView;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::testing::MemoryWindowHost;

    #[test]
    fn application_key_requires_namespace_and_app_suffix() {
        assert!(ApplicationKey::new("/Applications/", "About.app").is_ok());
        assert!(ApplicationKey::new("/System/Library/", "Snake.app").is_ok());
        assert!(ApplicationKey::new("Applications/", "About.app").is_err());
        assert!(ApplicationKey::new("/Applications", "About.app").is_err());
        assert!(ApplicationKey::new("/Applications/", "About").is_err());
        assert!(ApplicationKey::new("/Applications/", ".app").is_err());
    }

    #[test]
    fn launch_path_parses_at_last_separator() {
        let key = ApplicationKey::parse("/Applications/Contact.app").expect("valid path");
        assert_eq!(key.path(), "/Applications/");
        assert_eq!(key.app_name(), "Contact.app");
        assert_eq!(key.launch_path(), "/Applications/Contact.app");
        assert!(ApplicationKey::parse("Contact.app").is_err());
        assert!(ApplicationKey::parse("/Applications/").is_err());
    }

    #[test]
    fn events_serialize_with_kind_discriminator() {
        let open = ApplicationEvent::open(json!({ "tab": "projects" }));
        assert_eq!(
            serde_json::to_value(&open).expect("serialize"),
            json!({ "kind": "application-open", "args": { "tab": "projects" } })
        );

        let close: ApplicationEvent =
            serde_json::from_value(json!({ "kind": "application-close" })).expect("deserialize");
        assert_eq!(close, ApplicationEvent::Close);
    }

    #[test]
    fn unknown_kinds_deserialize_as_custom_events() {
        let event: ApplicationEvent =
            serde_json::from_value(json!({ "kind": "about-open-contact-event" }))
                .expect("deserialize");
        assert_eq!(event.kind(), "about-open-contact-event");
        assert!(matches!(event, ApplicationEvent::Custom(_)));
    }

    #[test]
    fn custom_constructor_normalizes_reserved_kinds() {
        assert_eq!(
            ApplicationEvent::custom(APPLICATION_CLOSE_KIND, Value::Null),
            ApplicationEvent::Close
        );
        assert_eq!(
            ApplicationEvent::custom(APPLICATION_OPEN_KIND, json!(1)),
            ApplicationEvent::open(json!(1))
        );
    }

    #[test]
    fn centered_rect_centers_on_desktop_and_spans_on_mobile() {
        let desktop = centered_window_rect(Some(ScreenResolution::new(1200, 800)), 520, 640, 120);
        assert_eq!(
            desktop,
            WindowRect {
                x: 340,
                y: 120,
                w: 520,
                h: 640
            }
        );

        let mobile = centered_window_rect(Some(ScreenResolution::new(390, 700)), 520, 640, 120);
        assert_eq!(
            mobile,
            WindowRect {
                x: 0,
                y: 120,
                w: 390,
                h: 580
            }
        );

        let unmeasured = centered_window_rect(None, 480, 300, 40);
        assert_eq!(unmeasured.x, (1280 - 480) / 2);
    }

    fn noop_module() -> AppModule {
        AppModule::new(|_| ().into_view())
    }

    fn request(owner: &ApplicationKey) -> OpenWindowRequest {
        OpenWindowRequest::new(
            owner.clone(),
            "Test",
            WindowRect {
                x: 0,
                y: 0,
                w: 300,
                h: 200,
            },
            ViewGenerator::ready(noop_module()),
        )
    }

    #[test]
    fn single_window_policy_focuses_existing_window() {
        let host = MemoryWindowHost::default();
        let owner = ApplicationKey::trusted("/Applications/", "About.app");

        let first = open_with_policy(&host, &owner, WindowPolicy::SingleWindow, || {
            request(&owner)
        });
        let second = open_with_policy(&host, &owner, WindowPolicy::SingleWindow, || {
            request(&owner)
        });

        assert_eq!(first, second);
        assert_eq!(host.open_windows(), vec![first]);
        assert_eq!(host.focus_log(), vec![first]);
    }

    #[test]
    fn multi_window_policy_always_opens() {
        let host = MemoryWindowHost::default();
        let owner = ApplicationKey::trusted("/Applications/", "Memes.app");

        let first = open_with_policy(&host, &owner, WindowPolicy::MultiWindow, || {
            request(&owner)
        });
        let second = open_with_policy(&host, &owner, WindowPolicy::MultiWindow, || {
            request(&owner)
        });

        assert_ne!(first, second);
        assert_eq!(host.open_windows(), vec![first, second]);
    }

    fn unused_entrypoint(_: ApplicationContext) -> Rc<dyn Application> {
        unreachable!("entrypoint is not invoked by base handler tests")
    }

    const TEST_CONFIG: ApplicationConfig = ApplicationConfig {
        display_name: "Test",
        dock_priority: None,
        path: "/Applications/",
        app_name: "Test.app",
        app_icon: AppIcon {
            src: "/icons/test.png",
            alt: "Test application",
        },
        entrypoint: unused_entrypoint,
    };

    #[test]
    fn base_handler_closes_addressed_window_or_all_windows() {
        let host = MemoryWindowHost::default();
        let owner = TEST_CONFIG.key();
        let first = host.open(request(&owner));
        let second = host.open(request(&owner));
        let third = host.open(request(&owner));

        handle_base_event(&host, &TEST_CONFIG, &ApplicationEvent::Close, Some(second));
        assert_eq!(host.open_windows(), vec![first, third]);

        handle_base_event(&host, &TEST_CONFIG, &ApplicationEvent::Close, None);
        assert!(host.open_windows().is_empty());
    }

    #[test]
    fn base_handler_ignores_open_and_custom_kinds() {
        let host = MemoryWindowHost::default();
        let owner = TEST_CONFIG.key();
        let window = host.open(request(&owner));

        handle_base_event(
            &host,
            &TEST_CONFIG,
            &ApplicationEvent::custom("something-else", Value::Null),
            Some(window),
        );
        handle_base_event(
            &host,
            &TEST_CONFIG,
            &ApplicationEvent::open(Value::Null),
            Some(window),
        );

        assert_eq!(host.open_windows(), vec![window]);
    }
}
