//! Bounds + keyword form with Submit, Reset, and Confirm actions, plus the
//! add-note fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form keeps its own field text and writes results only through the
//! setter callbacks handed down by the app shell. Validation failures never
//! escape as errors: they become the message shown by `MessageBox`.

#[cfg(test)]
#[path = "input_box_test.rs"]
mod input_box_test;

use leptos::prelude::*;

use crate::components::controls::{Control, FormAction};
use crate::state::form::{FormState, NoteDraft, NoteField};
use crate::state::map::MapSetters;
use crate::state::notes::Note;
use crate::state::service::MapService;
use crate::util::bounds::{BoundField, Bounds, ValidationError, validate_keyword};
use crate::util::clock::now_ms;
use crate::util::geo::GeoData;

/// Bounds/keyword input form.
#[component]
pub fn InputBox(
    set_overlay: Callback<Option<GeoData>>,
    set_message: Callback<String>,
    set_notes: Callback<Vec<Note>>,
) -> impl IntoView {
    let service = expect_context::<RwSignal<MapService>>();
    let form = RwSignal::new(FormState::default());
    let setters = CallbackSetters { overlay: set_overlay, message: set_message, notes: set_notes };

    let run = move |action: FormAction| {
        let mut draft = form.get_untracked();
        let mut out = setters;
        service.update_untracked(|svc| apply_action(action, &mut draft, svc, now_ms(), &mut out));
        form.set(draft);
    };

    let bound_input = move |field: BoundField| {
        let control = Control::Bound(field);
        view! {
            <input
                class="input-box__input"
                type="number"
                step="any"
                placeholder={control.caption()}
                aria-label={control.accessible_name()}
                prop:value=move || form.with(|f| f.bound(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let bad_input = has_bad_input(&ev);
                    form.update(|f| f.input_bound(field, value, bad_input));
                }
            />
        }
    };

    let note_input = move |field: NoteField| {
        let control = Control::Note(field);
        view! {
            <input
                class="input-box__input input-box__input--note"
                type="text"
                placeholder={control.caption()}
                aria-label={control.accessible_name()}
                prop:value=move || form.with(|f| f.note.field(field).to_owned())
                on:input=move |ev| form.update(|f| *f.note.field_mut(field) = event_target_value(&ev))
            />
        }
    };

    let action_button = move |action: FormAction| {
        let control = Control::Action(action);
        view! {
            <button
                class="btn input-box__button"
                type="button"
                aria-label={control.accessible_name()}
                on:click=move |_| run(action)
            >
                {control.caption()}
            </button>
        }
    };

    view! {
        <div class="input-box">
            <div class="input-box__bounds">
                {BoundField::ALL.into_iter().map(bound_input).collect_view()}
            </div>
            <input
                class="input-box__input input-box__input--keyword"
                type="text"
                placeholder={Control::Keyword.caption()}
                aria-label={Control::Keyword.accessible_name()}
                prop:value=move || form.with(|f| f.keyword.clone())
                on:input=move |ev| form.update(|f| f.keyword = event_target_value(&ev))
            />
            <div class="input-box__actions">
                {action_button(FormAction::Submit)}
                {action_button(FormAction::Reset)}
                {action_button(FormAction::Confirm)}
            </div>
            <fieldset class="input-box__note">
                <legend>"New note"</legend>
                {NoteField::ALL.into_iter().map(note_input).collect_view()}
                {action_button(FormAction::AddNote)}
            </fieldset>
        </div>
    }
}

/// Whether the browser rejected the text typed into a number input. Its
/// value then reads as empty.
#[cfg(feature = "hydrate")]
fn has_bad_input(ev: &leptos::ev::Event) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .is_some_and(|input| input.validity().bad_input())
}

#[cfg(not(feature = "hydrate"))]
fn has_bad_input(_ev: &leptos::ev::Event) -> bool {
    false
}

/// Setter callbacks owned by the parent, adapted to [`MapSetters`].
#[derive(Clone, Copy)]
struct CallbackSetters {
    overlay: Callback<Option<GeoData>>,
    message: Callback<String>,
    notes: Callback<Vec<Note>>,
}

impl MapSetters for CallbackSetters {
    fn set_message(&mut self, message: String) {
        self.message.run(message);
    }

    fn set_overlay(&mut self, overlay: Option<GeoData>) {
        self.overlay.run(overlay);
    }

    fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes.run(notes);
    }
}

/// Run one form action against the field text, writing results to `out`.
///
/// - Reset clears the fields and every output.
/// - Submit validates the bounds and publishes the filtered overlay.
/// - Confirm validates bounds and keyword together and publishes the notes
///   found by the search.
///
/// - Add Note saves the draft note and publishes the full note list.
///
/// Any validation failure clears the overlay (Submit) or leaves the notes
/// untouched (Confirm, Add Note) and sets an `invalid input:` message.
pub fn apply_action(
    action: FormAction,
    form: &mut FormState,
    service: &mut MapService,
    now_ms: f64,
    out: &mut impl MapSetters,
) {
    match action {
        FormAction::Reset => {
            form.reset();
            out.set_overlay(None);
            out.set_notes(Vec::new());
            out.set_message(String::new());
        }
        FormAction::Submit => match form.bounds() {
            Ok(bounds) => {
                let overlay = service.overlay(&bounds, now_ms);
                out.set_message(overlay_notice(overlay.features.len()));
                out.set_overlay(Some(overlay));
            }
            Err(err) => {
                out.set_overlay(None);
                out.set_message(err.notice());
            }
        },
        FormAction::Confirm => match validate_search(form) {
            Ok((bounds, keyword)) => {
                let notes = service.search_notes(&keyword, &bounds);
                out.set_message(notes_notice(notes.len(), &keyword));
                out.set_notes(notes);
            }
            Err(err) => out.set_message(err.notice()),
        },
        FormAction::AddNote => match form.note.to_note().and_then(|note| {
            let title = note.title.clone();
            service.add_note(note).map(|notes| (title, notes))
        }) {
            Ok((title, notes)) => {
                out.set_message(added_notice(&title, notes.len()));
                out.set_notes(notes);
                form.note = NoteDraft::default();
            }
            Err(err) => out.set_message(err.notice()),
        },
    }
}

fn validate_search(form: &FormState) -> Result<(Bounds, String), ValidationError> {
    let bounds = form.bounds()?;
    let keyword = validate_keyword(&form.keyword)?;
    Ok((bounds, keyword))
}

fn overlay_notice(count: usize) -> String {
    match count {
        1 => "Showing 1 overlay area.".to_owned(),
        n => format!("Showing {n} overlay areas."),
    }
}

fn notes_notice(count: usize, keyword: &str) -> String {
    let noun = if count == 1 { "note" } else { "notes" };
    if keyword.is_empty() {
        format!("Found {count} {noun} in bounds.")
    } else {
        format!("Found {count} {noun} matching \"{keyword}\".")
    }
}

fn added_notice(title: &str, total: usize) -> String {
    let noun = if total == 1 { "note" } else { "notes" };
    format!("Added note \"{title}\". {total} {noun} saved.")
}
