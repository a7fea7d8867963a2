//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure logic (bounds parsing, overlay filtering,
//! caching) and the browser-environment glue so components stay thin and
//! the behavior is testable without a DOM.

pub mod bounds;
pub mod clock;
pub mod geo;
pub mod overlay;
pub mod overlay_cache;
