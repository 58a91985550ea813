//! Millisecond wall clock with a wasm/native split.
//!
//! The wasm side reads `Date.now()`; the native side measures from an
//! `Instant` taken at construction. Both yield monotonic-enough deltas for
//! frame pacing.

#[derive(Clone, Copy)]
pub struct Clock {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Clock {
    pub fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Clock {
                start_ms: js_sys::Date::now(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Clock {
                start: std::time::Instant::now(),
            }
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}
