//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{
    input_box::InputBox, message_box::MessageBox, note_list::NoteList, overlay_summary::OverlaySummary,
};
use crate::state::map::{MapSetters, MapState};
use crate::state::notes::Note;
use crate::state::service::MapService;
use crate::util::geo::GeoData;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the form outputs and hands them down: read-only signals to the
/// display components, setter callbacks to `InputBox`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let service = MapService::bundled().unwrap_or_else(|e| {
        leptos::logging::warn!("bundled map data unavailable: {e}");
        MapService::default()
    });
    provide_context(RwSignal::new(service));

    let map = RwSignal::new(MapState::default());

    let set_overlay = Callback::new(move |overlay: Option<GeoData>| map.update(|m| m.set_overlay(overlay)));
    let set_message = Callback::new(move |message: String| map.update(|m| m.set_message(message)));
    let set_notes = Callback::new(move |notes: Vec<Note>| map.update(|m| m.set_notes(notes)));

    let message = Signal::derive(move || map.with(|m| m.message.clone()));
    let overlay = Signal::derive(move || map.with(|m| m.overlay.clone()));
    let notes = Signal::derive(move || map.with(|m| m.notes.clone()));

    view! {
        <Stylesheet id="leptos" href="/pkg/mapnotes.css"/>
        <Title text="Map Notes"/>

        <main class="map-page">
            <section class="map-page__form">
                <InputBox set_overlay set_message set_notes/>
                <MessageBox message/>
            </section>
            <section class="map-page__results">
                <OverlaySummary overlay/>
                <NoteList notes/>
            </section>
        </main>
    }
}
