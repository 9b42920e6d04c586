//! Reducer actions, side-effect intents, and transition logic for the window compositor.

use desktop_app_contract::{ApplicationKey, OpenWindowRequest, WindowRect};
use thiserror::Error;

use crate::{
    model::{CompositorState, WindowId, WindowRecord, WindowView},
    window_manager::{
        focus_window_internal, normalize_window_stack, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`] to mutate [`CompositorState`].
pub enum WindowAction {
    /// Open a new window on top of the stack and focus it.
    Open(OpenWindowRequest),
    /// Close a window by id.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Move a window's top-left corner.
    Move {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Resize a window, clamped to the minimum window size.
    Resize {
        /// Window to resize.
        window_id: WindowId,
        /// Requested width.
        w: i32,
        /// Requested height.
        h: i32,
    },
    /// Close every window owned by an application.
    CloseOwnedBy {
        /// Owning application.
        owner: ApplicationKey,
    },
    /// Replace a window's view after its generator settled.
    ResolveView {
        /// Window whose view resolved.
        window_id: WindowId,
        /// Resolved view state.
        view: WindowView,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_windows`] for the compositor to execute.
pub enum CompositorEffect {
    /// Start resolving the new window's view generator.
    StartViewLoad(WindowId),
    /// Abort a pending view load because its window is gone.
    CancelViewLoad(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference a missing window.
pub enum CompositorError {
    /// The target window id was not found in the current state.
    #[error("window {0:?} not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`WindowAction`] to the compositor state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`CompositorError::WindowNotFound`] when an action references a window that is not
/// present. `CloseOwnedBy` never fails; closing nothing is not an error.
pub fn reduce_windows(
    state: &mut CompositorState,
    action: WindowAction,
) -> Result<Vec<CompositorEffect>, CompositorError> {
    let mut effects = Vec::new();
    match action {
        WindowAction::Open(request) => {
            let (_, open_effects) = open_window(state, request);
            effects.extend(open_effects);
        }
        WindowAction::Close { window_id } => {
            let index = state
                .windows
                .iter()
                .position(|w| w.id == window_id)
                .ok_or(CompositorError::WindowNotFound(window_id))?;
            let removed = state.windows.remove(index);
            if removed.view.is_loading() {
                effects.push(CompositorEffect::CancelViewLoad(window_id));
            }
            normalize_window_stack(state);
        }
        WindowAction::Focus { window_id } => {
            if !focus_window_internal(state, window_id) {
                return Err(CompositorError::WindowNotFound(window_id));
            }
        }
        WindowAction::Move { window_id, x, y } => {
            let window = find_window_mut(state, window_id)?;
            window.rect = window.rect.at(x, y);
        }
        WindowAction::Resize { window_id, w, h } => {
            let window = find_window_mut(state, window_id)?;
            window.rect = WindowRect {
                w,
                h,
                ..window.rect
            }
            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        }
        WindowAction::CloseOwnedBy { owner } => {
            let mut kept = Vec::with_capacity(state.windows.len());
            for window in state.windows.drain(..) {
                if window.owner != owner {
                    kept.push(window);
                } else if window.view.is_loading() {
                    effects.push(CompositorEffect::CancelViewLoad(window.id));
                }
            }
            state.windows = kept;
            normalize_window_stack(state);
        }
        WindowAction::ResolveView { window_id, view } => {
            let window = find_window_mut(state, window_id)?;
            window.view = view;
        }
    }

    Ok(effects)
}

/// Opens a window on top of the stack and returns its id with the effects to run.
///
/// Window creation never fails, so the compositor calls this directly to learn the new id.
pub fn open_window(
    state: &mut CompositorState,
    request: OpenWindowRequest,
) -> (WindowId, Vec<CompositorEffect>) {
    let window_id = next_window_id(state);
    let record = WindowRecord {
        id: window_id,
        owner: request.owner,
        title: request.title,
        rect: request.rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        z_index: 0,
        is_focused: false,
        args: request.args,
        generator: request.generator,
        view: WindowView::Loading,
    };
    state.windows.push(record);
    focus_window_internal(state, window_id);
    (window_id, vec![CompositorEffect::StartViewLoad(window_id)])
}

fn next_window_id(state: &mut CompositorState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut CompositorState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, CompositorError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(CompositorError::WindowNotFound(window_id))
}
