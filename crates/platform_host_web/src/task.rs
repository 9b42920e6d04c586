//! Event-loop task spawning for the browser.

use platform_host::{LocalTask, TaskSpawner};

#[derive(Debug, Clone, Copy, Default)]
/// Spawner that schedules tasks on the browser microtask queue.
///
/// Native builds have no browser event loop; tasks are dropped unpolled there.
pub struct WebTaskSpawner;

impl TaskSpawner for WebTaskSpawner {
    fn spawn_local(&self, task: LocalTask) {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);

        #[cfg(not(target_arch = "wasm32"))]
        drop(task);
    }
}
