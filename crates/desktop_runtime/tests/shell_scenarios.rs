use std::rc::Rc;

use desktop_app_about::ABOUT_OPEN_CONTACT_EVENT;
use desktop_app_contact::CONTACT_CLEAR_DRAFT_EVENT;
use desktop_app_contract::{ApplicationEvent, ApplicationKey, SystemApis, WindowHost};
use desktop_app_memes::MEMES_REFRESH_EVENT;
use desktop_runtime::{
    apps::register_builtin_applications, ApplicationManager, ApplicationPhase, WindowCompositor,
    WindowView,
};
use futures::{
    executor::{LocalPool, LocalSpawner},
    task::LocalSpawnExt,
};
use platform_host::{HostServices, LocalTask, ScreenResolution, ScreenService, TaskSpawner};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const ABOUT: &str = "/Applications/About.app";
const CONTACT: &str = "/Applications/Contact.app";
const MEMES: &str = "/Applications/Memes.app";
const SNAKE: &str = "/Applications/Snake.app";

struct PoolSpawner(LocalSpawner);

impl TaskSpawner for PoolSpawner {
    fn spawn_local(&self, task: LocalTask) {
        self.0.spawn_local(task).expect("spawn on local pool");
    }
}

fn shell(pool: &LocalPool) -> ApplicationManager {
    let host = HostServices::headless();
    let screen = ScreenService::with_resolution(ScreenResolution::new(1440, 900));
    let manager = ApplicationManager::new(
        WindowCompositor::new(Rc::new(PoolSpawner(pool.spawner()))),
        SystemApis::new(screen, host.http.clone()),
    );
    register_builtin_applications(&manager);
    manager
}

fn key(launch_path: &str) -> ApplicationKey {
    ApplicationKey::parse(launch_path).expect("valid launch path")
}

fn titles(manager: &ApplicationManager) -> Vec<String> {
    manager
        .compositor()
        .windows()
        .into_iter()
        .map(|window| window.title)
        .collect()
}

#[test]
fn about_hands_over_to_contact_through_the_menu() {
    let mut pool = LocalPool::new();
    let manager = shell(&pool);

    manager.open(ABOUT, Value::Null);
    pool.run_until_stalled();
    assert_eq!(titles(&manager), vec!["About"]);
    assert_eq!(manager.phase(&key(CONTACT)), ApplicationPhase::Registered);

    assert!(manager.dispatch_to_focused(ApplicationEvent::custom(
        ABOUT_OPEN_CONTACT_EVENT,
        Value::Null
    )));
    pool.run_until_stalled();

    assert_eq!(titles(&manager), vec!["About", "Contact"]);
    let focused = manager
        .compositor()
        .focused_window()
        .and_then(|window| manager.compositor().window(window))
        .expect("focused window");
    assert_eq!(focused.owner, key(CONTACT));
    assert!(matches!(focused.view, WindowView::Ready(_)));
    assert_eq!(manager.focused_menu_entries()[0].name, "Contact");
}

#[test]
fn single_window_apps_reuse_their_window_and_instance() {
    let mut pool = LocalPool::new();
    let manager = shell(&pool);

    manager.open(SNAKE, Value::Null);
    manager.open(ABOUT, Value::Null);
    manager.open(SNAKE, json!({ "ignored": true }));
    pool.run_until_stalled();

    assert_eq!(titles(&manager), vec!["About", "Snake"]);
    assert_eq!(manager.instance_count(), 2);
    assert_eq!(manager.compositor().windows_of(&key(SNAKE)).len(), 1);
}

#[test]
fn memes_opens_a_window_per_launch() {
    let mut pool = LocalPool::new();
    let manager = shell(&pool);

    manager.open(MEMES, Value::Null);
    manager.open(MEMES, Value::Null);
    pool.run_until_stalled();

    assert_eq!(manager.compositor().windows_of(&key(MEMES)).len(), 2);
    assert_eq!(manager.instance_count(), 1);
    assert!(manager.dispatch_to_focused(ApplicationEvent::custom(
        MEMES_REFRESH_EVENT,
        Value::Null
    )));
}

#[test]
fn closing_last_window_keeps_instance_idle_until_relaunch() {
    let mut pool = LocalPool::new();
    let manager = shell(&pool);

    manager.open(CONTACT, Value::Null);
    pool.run_until_stalled();
    let window = manager.compositor().windows_of(&key(CONTACT))[0];
    let instance = manager.instance(&key(CONTACT)).expect("contact instance");

    assert!(manager.dispatch_to_window(window, ApplicationEvent::Close));
    assert!(manager.compositor().windows().is_empty());
    assert_eq!(manager.phase(&key(CONTACT)), ApplicationPhase::Idle);
    assert!(!manager.dispatch_to_window(
        window,
        ApplicationEvent::custom(CONTACT_CLEAR_DRAFT_EVENT, Value::Null)
    ));

    manager.open(CONTACT, Value::Null);
    pool.run_until_stalled();
    assert_eq!(manager.phase(&key(CONTACT)), ApplicationPhase::Active);
    let relaunched = manager.instance(&key(CONTACT)).expect("contact instance");
    assert!(Rc::ptr_eq(&instance, &relaunched));
}

#[test]
fn unknown_and_malformed_launch_paths_open_nothing() {
    let pool = LocalPool::new();
    let manager = shell(&pool);

    manager.open("/Applications/Ghost.app", Value::Null);
    manager.open("About", Value::Null);
    assert!(manager.try_open("/Applications/Ghost.app", Value::Null).is_err());

    assert!(manager.compositor().windows().is_empty());
    assert_eq!(manager.instance_count(), 0);
    assert!(!manager.dispatch_to_focused(ApplicationEvent::Close));
}

#[test]
fn windows_are_centered_on_the_reported_screen() {
    let mut pool = LocalPool::new();
    let manager = shell(&pool);

    manager.open(ABOUT, Value::Null);
    pool.run_until_stalled();
    let about = manager.compositor().windows()[0].clone();
    assert_eq!((about.rect.x, about.rect.y), ((1440 - 720) / 2, 64));
    assert_eq!((about.rect.w, about.rect.h), (720, 600));
}
