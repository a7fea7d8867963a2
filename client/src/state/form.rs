//! Raw text of the bounds form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `InputBox` owns one `FormState` signal. Values stay as typed strings until
//! an action validates them, so an in-progress entry such as `-` is never
//! rejected mid-keystroke.
//!
//! A number input whose text the browser cannot parse reports an empty
//! value. The field's bad-input flag keeps that apart from a field the user
//! left blank.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::state::notes::{Note, NoteError};
use crate::util::bounds::{BoundField, Bounds, ValidationError, parse_coordinate};

/// Field text for the four bounds, the keyword, and the new-note draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub min_lat: String,
    pub max_lat: String,
    pub min_lon: String,
    pub max_lon: String,
    pub keyword: String,
    pub note: NoteDraft,
    bad_input: [bool; 4],
}

impl FormState {
    #[must_use]
    pub fn bound(&self, field: BoundField) -> &str {
        match field {
            BoundField::MinLat => &self.min_lat,
            BoundField::MaxLat => &self.max_lat,
            BoundField::MinLon => &self.min_lon,
            BoundField::MaxLon => &self.max_lon,
        }
    }

    pub fn bound_mut(&mut self, field: BoundField) -> &mut String {
        match field {
            BoundField::MinLat => &mut self.min_lat,
            BoundField::MaxLat => &mut self.max_lat,
            BoundField::MinLon => &mut self.min_lon,
            BoundField::MaxLon => &mut self.max_lon,
        }
    }

    /// Record an input event on a bounds field: its reported value and
    /// whether the browser flagged the typed text as unparseable.
    pub fn input_bound(&mut self, field: BoundField, value: String, bad_input: bool) {
        *self.bound_mut(field) = value;
        self.bad_input[field.index()] = bad_input;
    }

    #[must_use]
    pub fn has_bad_input(&self, field: BoundField) -> bool {
        self.bad_input[field.index()]
    }

    /// Validate the four bounds fields as a unit, in form order.
    pub fn bounds(&self) -> Result<Bounds, ValidationError> {
        Bounds::parse_fields(|field| {
            if self.has_bad_input(field) {
                return Err(ValidationError::BadInput { field });
            }
            parse_coordinate(field, self.bound(field))
        })
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Text inputs of the add-note form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Body,
    Latitude,
    Longitude,
}

impl NoteField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Body, Self::Latitude, Self::Longitude];
}

/// Unsaved note text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub latitude: String,
    pub longitude: String,
}

impl NoteDraft {
    #[must_use]
    pub fn field(&self, field: NoteField) -> &str {
        match field {
            NoteField::Title => &self.title,
            NoteField::Body => &self.body,
            NoteField::Latitude => &self.latitude,
            NoteField::Longitude => &self.longitude,
        }
    }

    pub fn field_mut(&mut self, field: NoteField) -> &mut String {
        match field {
            NoteField::Title => &mut self.title,
            NoteField::Body => &mut self.body,
            NoteField::Latitude => &mut self.latitude,
            NoteField::Longitude => &mut self.longitude,
        }
    }

    /// Read the draft into a [`Note`]. Coordinate ranges are checked when the
    /// note book accepts it.
    pub fn to_note(&self) -> Result<Note, NoteError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(NoteError::MissingTitle);
        }
        let latitude = parse_note_coordinate("latitude", &self.latitude)?;
        let longitude = parse_note_coordinate("longitude", &self.longitude)?;
        Ok(Note::new(title, self.body.trim(), latitude, longitude))
    }
}

fn parse_note_coordinate(field: &'static str, raw: &str) -> Result<f64, NoteError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| NoteError::NotANumber { field, raw: trimmed.to_owned() })
}
