//! Photo Drop Zone Component
//!
//! Accepts a photo dropped onto the zone or chosen with the hidden picker.

use leptos::prelude::*;
use leptos_filedrop::{create_filedrop_signals, make_on_dragleave, make_on_dragover, make_on_drop, make_on_file_change, open_picker, FileOrigin};

use crate::validation::ALLOWED_PHOTO_TYPES;

const PICKER_ID: &str = "photoInput";

#[component]
pub fn PhotoDropZone<F>(
    /// Called with the first file from either entry point
    on_file: F,
    /// Preview of the chosen or current photo
    #[prop(into)]
    preview: Signal<String>,
) -> impl IntoView
where
    F: Fn(web_sys::File, FileOrigin) + Clone + 'static,
{
    let zone = create_filedrop_signals();

    view! {
        <div
            class=move || if zone.is_over_read.get() { "photo-drop-zone active" } else { "photo-drop-zone" }
            on:dragover=make_on_dragover(zone)
            on:dragleave=make_on_dragleave(zone)
            on:drop=make_on_drop(zone, on_file.clone())
            on:click=move |_| open_picker(PICKER_ID)
        >
            <img class="photo-preview" src=move || preview.get() alt="Photo preview" />
            <p class="drop-hint">"Drop a photo here or click to choose one"</p>
        </div>
        // Must stay outside the clickable zone
        <input
            id=PICKER_ID
            type="file"
            accept=ALLOWED_PHOTO_TYPES.join(",")
            style="display: none"
            on:change=make_on_file_change(on_file)
        />
    }
}
