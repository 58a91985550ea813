//! Console logging macros.
//!
//! On wasm32 these forward to the browser console; on native targets they
//! still evaluate their arguments (so format strings stay checked) and
//! discard the result. Physics anomalies are logged, never raised.

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($t)*);
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($t)*);
        }
    }};
}
