//! Location notes and keyword search.
//!
//! DESIGN
//! ======
//! Notes are kept in insertion order in an in-memory [`NoteBook`]. Search is
//! behind the [`NoteSearch`] trait so the form does not care whether results
//! come from the bundled book or another source.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use serde::{Deserialize, Serialize};

use crate::util::bounds::{Axis, Bounds, INVALID_INPUT_PREFIX};

/// A titled note pinned to a point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub note: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Note {
    pub fn new(title: impl Into<String>, note: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { title: title.into(), note: note.into(), latitude, longitude }
    }

    /// Case-insensitive match against title or body. An empty keyword matches.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.note.to_lowercase().contains(&needle)
    }
}

/// A note was rejected by the note book or could not be read from the form.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NoteError {
    #[error("note title is empty")]
    MissingTitle,
    #[error("note {field} {raw:?} is not a number")]
    NotANumber { field: &'static str, raw: String },
    #[error("note {title:?} has latitude {latitude} outside [-90, 90]")]
    LatitudeOutOfRange { title: String, latitude: f64 },
    #[error("note {title:?} has longitude {longitude} outside [-180, 180]")]
    LongitudeOutOfRange { title: String, longitude: f64 },
}

impl NoteError {
    /// User-facing message shown by the message box.
    #[must_use]
    pub fn notice(&self) -> String {
        format!("{INVALID_INPUT_PREFIX} {self}")
    }
}

/// Keyword + location note lookup.
pub trait NoteSearch {
    /// Notes inside `bounds` whose title or body contains `keyword`.
    fn search(&self, keyword: &str, bounds: &Bounds) -> Vec<Note>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    /// Build a note book from `notes`, validating each one.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Result<Self, NoteError> {
        let mut book = Self::default();
        for note in notes {
            book.add(note)?;
        }
        Ok(book)
    }

    /// Append a note after checking its coordinates.
    pub fn add(&mut self, note: Note) -> Result<(), NoteError> {
        if !Axis::Latitude.contains(note.latitude) {
            return Err(NoteError::LatitudeOutOfRange { title: note.title, latitude: note.latitude });
        }
        if !Axis::Longitude.contains(note.longitude) {
            return Err(NoteError::LongitudeOutOfRange { title: note.title, longitude: note.longitude });
        }
        self.notes.push(note);
        Ok(())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }
}

impl NoteSearch for NoteBook {
    fn search(&self, keyword: &str, bounds: &Bounds) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| bounds.contains(note.latitude, note.longitude) && note.matches(keyword))
            .cloned()
            .collect()
    }
}
