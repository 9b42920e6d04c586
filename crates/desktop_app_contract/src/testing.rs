//! In-memory [`WindowHost`] and [`ApplicationLauncher`] adapters for application tests.

use std::{cell::RefCell, rc::Rc};

use serde_json::Value;

use crate::{
    ApplicationKey, ApplicationLauncher, OpenWindowRequest, WindowContext, WindowHost, WindowRect,
};

#[derive(Debug, Clone, PartialEq)]
/// Window request captured by [`MemoryWindowHost`].
pub struct OpenedWindow {
    /// Context assigned at open time.
    pub context: WindowContext,
    /// Requesting application.
    pub owner: ApplicationKey,
    /// Requested title.
    pub title: String,
    /// Requested placement.
    pub rect: WindowRect,
    /// Launch payload.
    pub args: Value,
}

#[derive(Debug, Default)]
struct MemoryWindowHostState {
    next_window_id: u64,
    opened: Vec<OpenedWindow>,
    open: Vec<WindowContext>,
    focus_log: Vec<WindowContext>,
}

#[derive(Debug, Clone, Default)]
/// Window host that records requests without resolving views.
///
/// Open windows are kept in stacking order; focusing moves a window to the top.
pub struct MemoryWindowHost {
    inner: Rc<RefCell<MemoryWindowHostState>>,
}

impl MemoryWindowHost {
    /// Returns every window ever opened, in request order.
    pub fn opened(&self) -> Vec<OpenedWindow> {
        self.inner.borrow().opened.clone()
    }

    /// Returns the currently open windows, bottom-most first.
    pub fn open_windows(&self) -> Vec<WindowContext> {
        self.inner.borrow().open.clone()
    }

    /// Returns every successful focus request in order.
    pub fn focus_log(&self) -> Vec<WindowContext> {
        self.inner.borrow().focus_log.clone()
    }

    /// Returns the recorded request for `window`.
    pub fn request_for(&self, window: WindowContext) -> Option<OpenedWindow> {
        self.inner
            .borrow()
            .opened
            .iter()
            .find(|opened| opened.context == window)
            .cloned()
    }
}

impl WindowHost for MemoryWindowHost {
    fn open(&self, request: OpenWindowRequest) -> WindowContext {
        let mut state = self.inner.borrow_mut();
        state.next_window_id += 1;
        let context = WindowContext::new(state.next_window_id);
        state.opened.push(OpenedWindow {
            context,
            owner: request.owner,
            title: request.title,
            rect: request.rect,
            args: request.args,
        });
        state.open.push(context);
        context
    }

    fn close(&self, window: WindowContext) {
        self.inner.borrow_mut().open.retain(|open| *open != window);
    }

    fn focus(&self, window: WindowContext) {
        let mut state = self.inner.borrow_mut();
        let Some(index) = state.open.iter().position(|open| *open == window) else {
            return;
        };
        let window = state.open.remove(index);
        state.open.push(window);
        state.focus_log.push(window);
    }

    fn windows_of(&self, owner: &ApplicationKey) -> Vec<WindowContext> {
        let state = self.inner.borrow();
        state
            .open
            .iter()
            .copied()
            .filter(|open| {
                state
                    .opened
                    .iter()
                    .any(|opened| opened.context == *open && opened.owner == *owner)
            })
            .collect()
    }

    fn close_all(&self, owner: &ApplicationKey) {
        for window in self.windows_of(owner) {
            self.close(window);
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Launcher that records launch requests.
pub struct MemoryLauncher {
    launches: Rc<RefCell<Vec<(String, Value)>>>,
}

impl MemoryLauncher {
    /// Returns every `(launch_path, args)` pair requested so far.
    pub fn launches(&self) -> Vec<(String, Value)> {
        self.launches.borrow().clone()
    }
}

impl ApplicationLauncher for MemoryLauncher {
    fn open(&self, launch_path: &str, args: Value) {
        self.launches
            .borrow_mut()
            .push((launch_path.to_string(), args));
    }
}
