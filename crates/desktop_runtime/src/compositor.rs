//! Window compositor: the single owner of the open-window collection.
//!
//! Every structural change runs through [`reduce_windows`]; the compositor executes the resulting
//! [`CompositorEffect`]s (starting and aborting view loads) and notifies subscribers when the
//! window collection changed.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use desktop_app_contract::{
    AppModule, ApplicationKey, OpenWindowRequest, WindowContext, WindowHost,
};
use futures::future::{abortable, AbortHandle};
use leptos::logging;
use platform_host::{ListenerSet, Subscription, TaskSpawner};

use crate::{
    model::{CompositorState, WindowId, WindowRecord, WindowView},
    reducer::{open_window, reduce_windows, CompositorEffect, CompositorError, WindowAction},
};

struct CompositorInner {
    state: RefCell<CompositorState>,
    pending_loads: RefCell<HashMap<WindowId, AbortHandle>>,
    listeners: ListenerSet<()>,
    spawner: Rc<dyn TaskSpawner>,
}

#[derive(Clone)]
/// Shared handle to the window compositor.
pub struct WindowCompositor {
    inner: Rc<CompositorInner>,
}

impl std::fmt::Debug for WindowCompositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowCompositor")
            .field("windows", &self.inner.state.borrow().windows.len())
            .field("pending_loads", &self.pending_view_loads())
            .finish()
    }
}

impl WindowCompositor {
    /// Creates an empty compositor that resolves view generators on `spawner`.
    pub fn new(spawner: Rc<dyn TaskSpawner>) -> Self {
        Self {
            inner: Rc::new(CompositorInner {
                state: RefCell::new(CompositorState::default()),
                pending_loads: RefCell::new(HashMap::new()),
                listeners: ListenerSet::default(),
                spawner,
            }),
        }
    }

    /// Returns the open windows, bottom-most first.
    pub fn windows(&self) -> Vec<WindowRecord> {
        self.inner.state.borrow().windows.clone()
    }

    /// Returns the record for `window` if it is still open.
    pub fn window(&self, window: WindowContext) -> Option<WindowRecord> {
        self.inner
            .state
            .borrow()
            .window(WindowId::from_context(window))
            .cloned()
    }

    /// Returns the focused window, if any window is open.
    pub fn focused_window(&self) -> Option<WindowContext> {
        self.inner
            .state
            .borrow()
            .focused_window_id()
            .map(WindowId::context)
    }

    /// Moves `window` to `(x, y)`; stale contexts are ignored.
    pub fn move_window(&self, window: WindowContext, x: i32, y: i32) {
        self.dispatch_or_ignore(WindowAction::Move {
            window_id: WindowId::from_context(window),
            x,
            y,
        });
    }

    /// Resizes `window`, clamped to the minimum window size; stale contexts are ignored.
    pub fn resize_window(&self, window: WindowContext, w: i32, h: i32) {
        self.dispatch_or_ignore(WindowAction::Resize {
            window_id: WindowId::from_context(window),
            w,
            h,
        });
    }

    /// Registers `listener` for window collection changes.
    pub fn subscribe(&self, listener: impl Fn(&()) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    /// Returns the number of view loads still in flight.
    pub fn pending_view_loads(&self) -> usize {
        self.inner.pending_loads.borrow().len()
    }

    /// Applies `action` and runs its effects.
    ///
    /// # Errors
    ///
    /// Returns the reducer error unchanged; the state is not modified in that case.
    pub fn dispatch(&self, action: WindowAction) -> Result<(), CompositorError> {
        let (changed, effects) = {
            let mut state = self.inner.state.borrow_mut();
            let previous = state.clone();
            let effects = reduce_windows(&mut state, action)?;
            (*state != previous, effects)
        };
        self.run_effects(effects);
        if changed {
            self.inner.listeners.notify(&());
        }
        Ok(())
    }

    fn dispatch_or_ignore(&self, action: WindowAction) {
        if let Err(err) = self.dispatch(action) {
            logging::debug_warn!("ignoring stale window operation: {err}");
        }
    }

    fn run_effects(&self, effects: Vec<CompositorEffect>) {
        for effect in effects {
            match effect {
                CompositorEffect::StartViewLoad(window_id) => self.start_view_load(window_id),
                CompositorEffect::CancelViewLoad(window_id) => {
                    if let Some(handle) = self.inner.pending_loads.borrow_mut().remove(&window_id)
                    {
                        handle.abort();
                    }
                }
            }
        }
    }

    fn start_view_load(&self, window_id: WindowId) {
        let generator = match self.inner.state.borrow().window(window_id) {
            Some(window) => window.generator.clone(),
            None => return,
        };
        let (load, handle) = abortable(generator.resolve(window_id.context()));
        self.inner
            .pending_loads
            .borrow_mut()
            .insert(window_id, handle);

        let compositor: Weak<CompositorInner> = Rc::downgrade(&self.inner);
        self.inner.spawner.spawn_local(Box::pin(async move {
            let Ok(result) = load.await else {
                return;
            };
            let Some(inner) = compositor.upgrade() else {
                return;
            };
            WindowCompositor { inner }.finish_view_load(window_id, result);
        }));
    }

    fn finish_view_load(&self, window_id: WindowId, result: Result<AppModule, String>) {
        self.inner.pending_loads.borrow_mut().remove(&window_id);
        let view = match result {
            Ok(module) => WindowView::Ready(module),
            Err(err) => {
                logging::warn!("view for window {} failed to load: {err}", window_id.0);
                WindowView::Failed(err)
            }
        };
        self.dispatch_or_ignore(WindowAction::ResolveView { window_id, view });
    }
}

impl WindowHost for WindowCompositor {
    fn open(&self, request: OpenWindowRequest) -> WindowContext {
        let (window_id, effects) = open_window(&mut self.inner.state.borrow_mut(), request);
        self.run_effects(effects);
        self.inner.listeners.notify(&());
        window_id.context()
    }

    fn close(&self, window: WindowContext) {
        self.dispatch_or_ignore(WindowAction::Close {
            window_id: WindowId::from_context(window),
        });
    }

    fn focus(&self, window: WindowContext) {
        self.dispatch_or_ignore(WindowAction::Focus {
            window_id: WindowId::from_context(window),
        });
    }

    fn windows_of(&self, owner: &ApplicationKey) -> Vec<WindowContext> {
        self.inner
            .state
            .borrow()
            .windows_owned_by(owner)
            .map(WindowRecord::context)
            .collect()
    }

    fn close_all(&self, owner: &ApplicationKey) {
        self.dispatch_or_ignore(WindowAction::CloseOwnedBy {
            owner: owner.clone(),
        });
    }
}
