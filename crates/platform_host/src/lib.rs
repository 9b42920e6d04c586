//! Typed host-domain contracts shared by the desktop runtime, its apps, and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It owns the viewport
//! classification broadcaster, the listener primitive it is built on, the HTTP and task-spawning
//! service traits, seedable randomness, and the host bundle assembled by entry layers. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod http;
pub mod listeners;
pub mod random;
pub mod screen;
pub mod task;

pub use host::{HostServices, HostStrategy};
pub use http::{
    FormField, HttpFuture, HttpService, MemoryHttpService, NoopHttpService, RecordedPost,
};
pub use listeners::{ListenerSet, Subscription};
pub use random::{entropy_seed, XorShift64};
pub use screen::{DeviceClass, ScreenResolution, ScreenService, MOBILE_BREAKPOINT_PX};
pub use task::{LocalTask, NoopTaskSpawner, TaskSpawner};
