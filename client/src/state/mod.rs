//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `form` holds the raw field text, `map` the outputs owned by the app shell,
//! `notes` the searchable note book, and `service` the overlay dataset plus
//! its cache.

pub mod form;
pub mod map;
pub mod notes;
pub mod service;
