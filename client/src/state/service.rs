//! Overlay dataset, filter cache, and note book behind one handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds a [`MapService`] from the bundled data files and provides it
//! through context as `RwSignal<MapService>`. Only `InputBox` reaches for it,
//! inside its click handlers, so nothing subscribes to it reactively.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use crate::state::notes::{Note, NoteBook, NoteError, NoteSearch};
use crate::util::bounds::Bounds;
use crate::util::geo::GeoData;
use crate::util::overlay::{FilterRequest, filter_features};
use crate::util::overlay_cache::{CacheStats, OverlayCache};

const BUNDLED_OVERLAY: &str = include_str!("../../data/overlay.geojson");
const BUNDLED_NOTES: &str = include_str!("../../data/notes.json");

/// Bundled data could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid note in {name}: {source}")]
    InvalidNote {
        name: &'static str,
        #[source]
        source: NoteError,
    },
}

#[derive(Clone, Debug, Default)]
pub struct MapService {
    dataset: GeoData,
    cache: OverlayCache,
    notes: NoteBook,
}

impl MapService {
    #[must_use]
    pub fn new(dataset: GeoData, notes: NoteBook) -> Self {
        Self { dataset, cache: OverlayCache::default(), notes }
    }

    /// Load the overlay collection and notes compiled into the bundle.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_OVERLAY, BUNDLED_NOTES)
    }

    /// Decode an overlay collection and a JSON array of notes.
    pub fn from_json(overlay: &str, notes: &str) -> Result<Self, DatasetError> {
        let dataset =
            GeoData::from_json(overlay).map_err(|source| DatasetError::Decode { name: "overlay", source })?;
        let notes: Vec<Note> =
            serde_json::from_str(notes).map_err(|source| DatasetError::Decode { name: "notes", source })?;
        let notes = NoteBook::from_notes(notes).map_err(|source| DatasetError::InvalidNote { name: "notes", source })?;
        Ok(Self::new(dataset, notes))
    }

    /// Features of the dataset inside `bounds`, served from cache when fresh.
    pub fn overlay(&mut self, bounds: &Bounds, now_ms: f64) -> GeoData {
        let request = FilterRequest::from_bounds(bounds);
        let dataset = &self.dataset;
        self.cache.get_or_load(request, now_ms, |request| filter_features(dataset, request))
    }

    /// Run the note search.
    #[must_use]
    pub fn search_notes(&self, keyword: &str, bounds: &Bounds) -> Vec<Note> {
        self.notes.search(keyword, bounds)
    }

    /// Add a note and return the full list, seeded notes first.
    pub fn add_note(&mut self, note: Note) -> Result<Vec<Note>, NoteError> {
        self.notes.add(note)?;
        Ok(self.notes.iter().cloned().collect())
    }

    #[cfg(test)]
    pub fn dataset(&self) -> &GeoData {
        &self.dataset
    }

    #[cfg(test)]
    pub fn notes(&self) -> &NoteBook {
        &self.notes
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
