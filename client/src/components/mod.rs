//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the bounds form and its outputs. The app shell owns the
//! outputs; components receive read-only signals or setter callbacks.

pub mod controls;
pub mod input_box;
pub mod message_box;
pub mod note_list;
pub mod overlay_summary;

#[cfg(test)]
pub(crate) mod harness;
