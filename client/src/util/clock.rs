//! Wall-clock access for cache expiry.
//!
//! Browser builds read `Date.now()`. SSR and native test builds have no user
//! interaction to time, so they report a constant zero.

/// Milliseconds since the Unix epoch in the browser, `0.0` elsewhere.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
