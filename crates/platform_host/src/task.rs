//! Local task spawning contract for single-threaded hosts.

use std::{future::Future, pin::Pin};

/// Boxed `!Send` task scheduled on the host event loop.
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Host service that schedules local tasks without blocking the caller.
pub trait TaskSpawner {
    /// Schedules `task` to run to completion on the current thread's event loop.
    fn spawn_local(&self, task: LocalTask);
}

#[derive(Debug, Clone, Copy, Default)]
/// Spawner that drops every task without polling it.
///
/// Useful for hosts that never resolve deferred work, such as static snapshot rendering.
pub struct NoopTaskSpawner;

impl TaskSpawner for NoopTaskSpawner {
    fn spawn_local(&self, _task: LocalTask) {}
}
