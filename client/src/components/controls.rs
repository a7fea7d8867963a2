//! Accessible roles and names of the form controls.
//!
//! DESIGN
//! ======
//! One table maps every form control to its ARIA role, accessible name, and
//! visible caption. `InputBox` renders `aria-label`s from it and the test
//! harness resolves role/name queries against it, so the two cannot drift.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::state::form::NoteField;
use crate::util::bounds::BoundField;

/// ARIA roles used by the form and message box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    SpinButton,
    TextBox,
    Button,
    Alert,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpinButton => "spinbutton",
            Self::TextBox => "textbox",
            Self::Button => "button",
            Self::Alert => "alert",
        }
    }
}

/// User-triggered form actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Reset,
    Submit,
    Confirm,
    AddNote,
}

/// Every interactive control of the bounds form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Bound(BoundField),
    Keyword,
    Note(NoteField),
    Action(FormAction),
}

impl Control {
    /// All controls in render order.
    pub const ALL: [Self; 13] = [
        Self::Bound(BoundField::MinLat),
        Self::Bound(BoundField::MaxLat),
        Self::Bound(BoundField::MinLon),
        Self::Bound(BoundField::MaxLon),
        Self::Keyword,
        Self::Action(FormAction::Submit),
        Self::Action(FormAction::Reset),
        Self::Action(FormAction::Confirm),
        Self::Note(NoteField::Title),
        Self::Note(NoteField::Body),
        Self::Note(NoteField::Latitude),
        Self::Note(NoteField::Longitude),
        Self::Action(FormAction::AddNote),
    ];

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Bound(_) => Role::SpinButton,
            Self::Keyword | Self::Note(_) => Role::TextBox,
            Self::Action(_) => Role::Button,
        }
    }

    #[must_use]
    pub const fn accessible_name(self) -> &'static str {
        match self {
            Self::Bound(BoundField::MinLat) => "Latitude input box",
            Self::Bound(BoundField::MaxLat) => "Max Latitude input box",
            Self::Bound(BoundField::MinLon) => "Longitude input box",
            Self::Bound(BoundField::MaxLon) => "Max Longitude input box",
            Self::Keyword => "Keyword input box",
            Self::Action(FormAction::Submit) => "Submit button",
            Self::Action(FormAction::Reset) => "Reset button",
            Self::Action(FormAction::Confirm) => "Confirm button",
            Self::Note(NoteField::Title) => "Note Title input box",
            Self::Note(NoteField::Body) => "Note Body input box",
            Self::Note(NoteField::Latitude) => "Note Latitude input box",
            Self::Note(NoteField::Longitude) => "Note Longitude input box",
            Self::Action(FormAction::AddNote) => "Add Note button",
        }
    }

    /// Visible placeholder or button text.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Bound(BoundField::MinLat) => "Min latitude",
            Self::Bound(BoundField::MaxLat) => "Max latitude",
            Self::Bound(BoundField::MinLon) => "Min longitude",
            Self::Bound(BoundField::MaxLon) => "Max longitude",
            Self::Keyword => "Keyword",
            Self::Action(FormAction::Submit) => "Submit",
            Self::Action(FormAction::Reset) => "Reset",
            Self::Action(FormAction::Confirm) => "Confirm",
            Self::Note(NoteField::Title) => "Title",
            Self::Note(NoteField::Body) => "Note",
            Self::Note(NoteField::Latitude) => "Latitude",
            Self::Note(NoteField::Longitude) => "Longitude",
            Self::Action(FormAction::AddNote) => "Add Note",
        }
    }
}

/// Resolve a control by role and accessible name.
#[must_use]
pub fn find_control(role: Role, name: &str) -> Option<Control> {
    Control::ALL.into_iter().find(|c| c.role() == role && c.accessible_name() == name)
}
