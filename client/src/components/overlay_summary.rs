//! Short text summary of the current overlay.
//!
//! Map rendering lives outside this crate; the summary tells the user what
//! the last submit produced.

#[cfg(test)]
#[path = "overlay_summary_test.rs"]
mod overlay_summary_test;

use leptos::prelude::*;

use crate::util::geo::GeoData;

#[component]
pub fn OverlaySummary(#[prop(into)] overlay: Signal<Option<GeoData>>) -> impl IntoView {
    let summary = move || overlay.with(|o| summarize(o.as_ref()));

    view! {
        <section class="overlay-summary" aria-label="Overlay">
            <p class="overlay-summary__text">{summary}</p>
        </section>
    }
}

/// Area count followed by the named areas, or a prompt when nothing is shown.
fn summarize(overlay: Option<&GeoData>) -> String {
    let Some(data) = overlay else {
        return "No overlay. Submit bounds to show areas.".to_owned();
    };
    let names: Vec<&str> = data.features.iter().filter_map(|f| f.name()).collect();
    let count = data.features.len();
    let noun = if count == 1 { "area" } else { "areas" };
    if names.is_empty() {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}: {}", names.join(", "))
    }
}
