use desktop_app_contract::{
    AppModule, ApplicationKey, ViewGenerator, WindowContext, WindowRect, WindowRuntimeId,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub WindowRuntimeId);

impl WindowId {
    pub const fn context(self) -> WindowContext {
        WindowContext::new(self.0)
    }

    pub const fn from_context(context: WindowContext) -> Self {
        Self(context.window_id())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WindowView {
    #[default]
    Loading,
    Ready(AppModule),
    Failed(String),
}

impl WindowView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub owner: ApplicationKey,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub is_focused: bool,
    pub args: Value,
    pub generator: ViewGenerator,
    pub view: WindowView,
}

impl WindowRecord {
    pub fn context(&self) -> WindowContext {
        self.id.context()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositorState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
}

impl Default for CompositorState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
        }
    }
}

impl CompositorState {
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn windows_owned_by(&self, owner: &ApplicationKey) -> impl Iterator<Item = &WindowRecord> {
        let owner = owner.clone();
        self.windows.iter().filter(move |w| w.owner == owner)
    }
}
