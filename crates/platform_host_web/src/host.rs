//! Browser host bundle assembly for the entry layer.

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, ScreenService};

use crate::{ViewportTracker, WebHttpService, WebTaskSpawner};

/// Browser host services plus the viewport listener that keeps their screen measured.
///
/// Dropping this value detaches the viewport listener; the services stay usable but the screen
/// stops updating.
#[derive(Debug)]
pub struct BrowserHost {
    /// Services injected into the desktop runtime.
    pub services: HostServices,
    viewport: ViewportTracker,
}

impl BrowserHost {
    /// Returns the viewport tracker feeding [`HostServices::screen`].
    pub fn viewport(&self) -> &ViewportTracker {
        &self.viewport
    }
}

/// Builds browser-backed host services and starts viewport tracking.
pub fn browser_host() -> BrowserHost {
    let screen = ScreenService::new();
    let viewport = ViewportTracker::install(&screen);
    BrowserHost {
        services: HostServices::new(
            HostStrategy::Browser,
            screen,
            Rc::new(WebHttpService),
            Rc::new(WebTaskSpawner),
        ),
        viewport,
    }
}
