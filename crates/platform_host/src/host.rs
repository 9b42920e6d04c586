//! Host service bundle assembled by entry layers and injected into the desktop runtime.

use std::rc::Rc;

use crate::{HttpService, NoopHttpService, NoopTaskSpawner, ScreenService, TaskSpawner};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition used by tests and non-browser targets.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

#[derive(Clone)]
/// Host services shared by the shell, the compositor, and every application.
pub struct HostServices {
    /// Composition path that produced this bundle.
    pub strategy: HostStrategy,
    /// Viewport classification broadcaster.
    pub screen: ScreenService,
    /// Network access for apps.
    pub http: Rc<dyn HttpService>,
    /// Event-loop task scheduler.
    pub spawner: Rc<dyn TaskSpawner>,
}

impl HostServices {
    /// Creates a bundle from explicit adapters.
    pub fn new(
        strategy: HostStrategy,
        screen: ScreenService,
        http: Rc<dyn HttpService>,
        spawner: Rc<dyn TaskSpawner>,
    ) -> Self {
        Self {
            strategy,
            screen,
            http,
            spawner,
        }
    }

    /// Creates a headless bundle with an unmeasured screen, no network, and no task execution.
    pub fn headless() -> Self {
        Self::new(
            HostStrategy::Headless,
            ScreenService::new(),
            Rc::new(NoopHttpService),
            Rc::new(NoopTaskSpawner),
        )
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("strategy", &self.strategy)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}
