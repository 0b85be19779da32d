/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Errors should continue
/// using `leptos::logging::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Output goes through `leptos::logging`, so it lands in the browser console
/// under wasm and on stderr in native tests and benchmarks.
///
/// # Examples
///
/// ```rust
/// metro_route_map::log!("Requesting route from {} to {}", "2800208", "2800112");
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg),+);
        }
        #[cfg(not(any(debug_assertions, feature = "console_logging")))]
        {
            let _ = ($(&$arg),+);
        }
    };
}
