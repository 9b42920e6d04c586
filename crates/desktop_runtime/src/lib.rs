//! Desktop shell runtime: the application registry, the window compositor, and the Leptos
//! shell that renders them.

pub mod apps;
pub mod components;
pub mod compositor;
pub mod deep_link;
pub mod manager;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::DesktopShell;
pub use compositor::WindowCompositor;
pub use manager::{ApplicationManager, ApplicationPhase, ManagerError};
pub use model::*;
pub use reducer::{reduce_windows, CompositorEffect, CompositorError, WindowAction};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
