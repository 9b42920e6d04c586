//! Viewport measurement feeding [`ScreenService`].

use platform_host::{ScreenResolution, ScreenService};

/// Converts raw `innerWidth`/`innerHeight` readings into a resolution.
///
/// Returns `None` for missing, negative, or non-finite readings.
pub fn resolution_from_inner_size(width: Option<f64>, height: Option<f64>) -> Option<ScreenResolution> {
    let to_px = |value: f64| (value.is_finite() && value >= 0.0).then(|| value.round() as u32);
    Some(ScreenResolution::new(to_px(width?)?, to_px(height?)?))
}

/// Measures the current browser viewport.
pub fn measure_viewport() -> Option<ScreenResolution> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        resolution_from_inner_size(
            window.inner_width().ok().and_then(|v| v.as_f64()),
            window.inner_height().ok().and_then(|v| v.as_f64()),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Keeps `screen` in sync with the browser viewport until dropped.
pub struct ViewportTracker {
    #[cfg(target_arch = "wasm32")]
    listener: Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

impl ViewportTracker {
    /// Reports the current viewport to `screen` and keeps reporting on every `resize`.
    pub fn install(screen: &ScreenService) -> Self {
        if let Some(resolution) = measure_viewport() {
            screen.report(resolution);
        }

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let screen = screen.clone();
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                if let Some(resolution) = measure_viewport() {
                    screen.report(resolution);
                }
            });
            let attached = web_sys::window()
                .map(|window| {
                    window
                        .add_event_listener_with_callback(
                            "resize",
                            listener.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                })
                .unwrap_or(false);
            Self {
                listener: attached.then_some(listener),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {}
        }
    }
}

impl Drop for ViewportTracker {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let (Some(listener), Some(window)) = (self.listener.take(), web_sys::window()) {
            use wasm_bindgen::JsCast;

            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
    }
}

impl std::fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTracker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inner_size_readings_round_to_pixels() {
        assert_eq!(
            resolution_from_inner_size(Some(1439.6), Some(900.0)),
            Some(ScreenResolution::new(1440, 900))
        );
        assert_eq!(resolution_from_inner_size(None, Some(900.0)), None);
        assert_eq!(resolution_from_inner_size(Some(-1.0), Some(900.0)), None);
        assert_eq!(resolution_from_inner_size(Some(f64::NAN), Some(900.0)), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_install_leaves_screen_unmeasured() {
        let screen = ScreenService::new();
        let _tracker = ViewportTracker::install(&screen);
        assert_eq!(screen.get_resolution(), None);
    }
}
