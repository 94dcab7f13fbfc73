//! Leptos FileDrop Utilities
//!
//! File drag-and-drop and file-picker helpers for Leptos.
//! Both entry points hand the first file over through the same callback,
//! tagged with where it came from.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Where a file was picked from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOrigin {
    /// `<input type="file">` change event
    Picker,
    /// Dropped onto a drop zone
    Drop,
}

/// Plain metadata of a browser file
#[derive(Clone, Debug, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn of(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// A drag is hovering over the zone
    pub is_over_read: ReadSignal<bool>,
    pub is_over_write: WriteSignal<bool>,
}

pub fn create_filedrop_signals() -> FileDropSignals {
    let (is_over_read, is_over_write) = signal(false);
    FileDropSignals {
        is_over_read,
        is_over_write,
    }
}

/// First file carried by a drop event
pub fn first_dropped_file(ev: &web_sys::DragEvent) -> Option<web_sys::File> {
    ev.data_transfer()?.files()?.get(0)
}

/// First file selected in the `<input type="file">` that fired `ev`
pub fn first_selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Create dragover handler. Must prevent default or the browser never fires `drop`.
pub fn make_on_dragover(zone: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        zone.is_over_write.set(true);
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(zone: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        zone.is_over_write.set(false);
    }
}

/// Create drop handler forwarding the first dropped file
pub fn make_on_drop<F>(zone: FileDropSignals, on_file: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(web_sys::File, FileOrigin) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        zone.is_over_write.set(false);
        match first_dropped_file(&ev) {
            Some(file) => on_file(file, FileOrigin::Drop),
            None => log::debug!("[FILEDROP] drop carried no files"),
        }
    }
}

/// Create change handler for a file input, forwarding the first selected file
pub fn make_on_file_change<F>(on_file: F) -> impl Fn(web_sys::Event) + Clone + 'static
where
    F: Fn(web_sys::File, FileOrigin) + Clone + 'static,
{
    move |ev: web_sys::Event| {
        if let Some(file) = first_selected_file(&ev) {
            on_file(file, FileOrigin::Picker);
        }
    }
}

/// Open the native picker of the file input with the given element id
pub fn open_picker(input_id: &str) {
    let input = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(input_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match input {
        Some(input) => input.click(),
        None => log::warn!("[FILEDROP] no file input with id '{}'", input_id),
    }
}

/// Read the whole file into memory
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Object URL for a local preview of the file
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}
