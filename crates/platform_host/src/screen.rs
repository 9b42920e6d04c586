//! Viewport classification snapshots and the broadcaster that publishes them.

use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::listeners::{ListenerSet, Subscription};

/// Viewports narrower than this many layout units are classified as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Coarse device classification derived from viewport width.
pub enum DeviceClass {
    /// Narrow, touch-first layout.
    Mobile,
    /// Wide, pointer-first layout.
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable viewport snapshot delivered to screen subscribers.
pub struct ScreenResolution {
    /// Viewport width in layout units.
    pub width: u32,
    /// Viewport height in layout units.
    pub height: u32,
}

impl ScreenResolution {
    /// Creates a snapshot from raw viewport dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the device classification for this snapshot.
    pub const fn device_class(self) -> DeviceClass {
        if self.width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Returns whether the viewport should use the mobile layout.
    pub const fn is_mobile_device(self) -> bool {
        matches!(self.device_class(), DeviceClass::Mobile)
    }
}

#[derive(Clone, Default)]
/// Publish/subscribe service for viewport changes.
///
/// The service starts unmeasured. Host adapters call [`ScreenService::report`] whenever they
/// measure the viewport; subscribers only hear changes reported after they subscribed, so
/// consumers that need the current state read [`ScreenService::get_resolution`] once as well.
pub struct ScreenService {
    current: Rc<Cell<Option<ScreenResolution>>>,
    listeners: ListenerSet<ScreenResolution>,
}

impl std::fmt::Debug for ScreenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenService")
            .field("current", &self.current.get())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScreenService {
    /// Creates an unmeasured screen service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a screen service that already holds a measurement.
    pub fn with_resolution(resolution: ScreenResolution) -> Self {
        let service = Self::default();
        service.current.set(Some(resolution));
        service
    }

    /// Returns the latest snapshot, or `None` before the first measurement.
    pub fn get_resolution(&self) -> Option<ScreenResolution> {
        self.current.get()
    }

    /// Registers `listener` for future viewport changes.
    pub fn subscribe(&self, listener: impl Fn(ScreenResolution) + 'static) -> Subscription {
        self.listeners
            .subscribe(move |resolution: &ScreenResolution| listener(*resolution))
    }

    /// Records a new measurement and notifies subscribers when it differs from the previous one.
    ///
    /// Returns whether subscribers were notified.
    pub fn report(&self, resolution: ScreenResolution) -> bool {
        if self.current.get() == Some(resolution) {
            return false;
        }
        self.current.set(Some(resolution));
        self.listeners.notify(&resolution);
        true
    }

    /// Returns the number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classification_uses_mobile_breakpoint() {
        assert!(ScreenResolution::new(390, 844).is_mobile_device());
        assert!(ScreenResolution::new(767, 1024).is_mobile_device());
        assert_eq!(
            ScreenResolution::new(768, 1024).device_class(),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn resolution_is_absent_before_first_report() {
        let screen = ScreenService::new();
        assert_eq!(screen.get_resolution(), None);

        screen.report(ScreenResolution::new(1280, 800));
        assert_eq!(
            screen.get_resolution(),
            Some(ScreenResolution::new(1280, 800))
        );
    }

    #[test]
    fn late_subscriber_does_not_receive_earlier_change() {
        let screen = ScreenService::new();
        screen.report(ScreenResolution::new(400, 800));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = seen.clone();
            screen.subscribe(move |resolution| seen.borrow_mut().push(resolution))
        };

        assert!(seen.borrow().is_empty());
        assert_eq!(
            screen.get_resolution(),
            Some(ScreenResolution::new(400, 800))
        );
    }

    #[test]
    fn unsubscribed_listener_stops_while_others_continue() {
        let screen = ScreenService::new();
        let kept = Rc::new(RefCell::new(Vec::new()));
        let dropped = Rc::new(RefCell::new(Vec::new()));

        let _kept_subscription = {
            let kept = kept.clone();
            screen.subscribe(move |resolution| kept.borrow_mut().push(resolution.width))
        };
        let dropped_subscription = {
            let dropped = dropped.clone();
            screen.subscribe(move |resolution| dropped.borrow_mut().push(resolution.width))
        };

        screen.report(ScreenResolution::new(1024, 768));
        dropped_subscription.unsubscribe();
        screen.report(ScreenResolution::new(600, 900));

        assert_eq!(*kept.borrow(), vec![1024, 600]);
        assert_eq!(*dropped.borrow(), vec![1024]);
        assert_eq!(screen.subscriber_count(), 1);
    }

    #[test]
    fn repeated_identical_report_is_not_broadcast() {
        let screen = ScreenService::new();
        let hits = Rc::new(Cell::new(0));
        let _subscription = {
            let hits = hits.clone();
            screen.subscribe(move |_| hits.set(hits.get() + 1))
        };

        assert!(screen.report(ScreenResolution::new(800, 600)));
        assert!(!screen.report(ScreenResolution::new(800, 600)));
        assert_eq!(hits.get(), 1);
    }
}
