//! List of notes returned by the last confirmed search.

#[cfg(test)]
#[path = "note_list_test.rs"]
mod note_list_test;

use leptos::prelude::*;

use crate::state::notes::Note;

#[component]
pub fn NoteList(#[prop(into)] notes: Signal<Vec<Note>>) -> impl IntoView {
    view! {
        <section class="note-list" aria-label="Notes">
            <Show
                when=move || !notes.with(Vec::is_empty)
                fallback=|| view! { <p class="note-list__empty">"No notes yet."</p> }
            >
                <ul class="note-list__items">
                    {move || {
                        notes
                            .get()
                            .into_iter()
                            .map(|note| {
                                let position = format_position(note.latitude, note.longitude);
                                view! {
                                    <li class="note-list__item">
                                        <span class="note-list__title">{note.title}</span>
                                        <span class="note-list__position">{position}</span>
                                        <p class="note-list__body">{note.note}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}

/// `lat, lon` with four decimals, e.g. `41.8393, -71.4162`.
fn format_position(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.4}, {longitude:.4}")
}
