//! Shared window-manager transition helpers used by the compositor reducer.

use crate::model::{CompositorState, WindowId};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

/// Focuses and raises `window_id`, making it the top and only focused window.
///
/// Returns `false` when the window does not exist. Focusing the window that is already focused
/// on top leaves the stack untouched.
pub fn focus_window_internal(state: &mut CompositorState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused)
            .unwrap_or(false);
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

/// Normalizes z-index ordering and focus invariants for all managed windows.
///
/// z-index follows collection order (bottom-most is `1`) and at most one window is focused; when
/// none is, the top-most window takes focus.
pub fn normalize_window_stack(state: &mut CompositorState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(top) = state.windows.last_mut() {
            top.is_focused = true;
        }
    }
}
