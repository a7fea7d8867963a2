//! Form outputs owned by the app shell: message, overlay, and notes.
//!
//! ARCHITECTURE
//! ============
//! `App` holds a single `RwSignal<MapState>`. Display components receive
//! read-only derived signals; `InputBox` receives setter callbacks and never
//! sees the state itself. [`MapSetters`] is the one write path, so the same
//! action code drives the live callbacks and a plain `MapState` in tests.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::state::notes::Note;
use crate::util::geo::GeoData;

/// Latest outputs of the bounds form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapState {
    /// Most recent validation or status message; empty at start and after reset.
    pub message: String,
    /// Overlay computed from the last valid submit.
    pub overlay: Option<GeoData>,
    /// Notes returned by the last confirmed search.
    pub notes: Vec<Note>,
}

/// Write access to [`MapState`] fields.
pub trait MapSetters {
    fn set_message(&mut self, message: String);
    fn set_overlay(&mut self, overlay: Option<GeoData>);
    fn set_notes(&mut self, notes: Vec<Note>);
}

impl MapSetters for MapState {
    fn set_message(&mut self, message: String) {
        self.message = message;
    }

    fn set_overlay(&mut self, overlay: Option<GeoData>) {
        self.overlay = overlay;
    }

    fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }
}
