//! Edit Profile Page
//!
//! Username and photo form, plus photo removal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::{preview_url, read_file_bytes, FileMeta, FileOrigin};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::PhotoDropZone;
use crate::context::{use_app_context, AppContext};
use crate::dialogs::{BrowserDialogs, Dialogs};
use crate::models::{PhotoUpload, Profile};
use crate::profile::{screen_photo, ProfileSync, NO_PHOTO_URL};
use crate::routes::Route;
use crate::store::Remote;
use crate::validation::PhotoCandidate;

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    // Copy handle, so the form handler can be re-created with the form
    let navigate = StoredValue::new_local(use_navigate());

    let profile = RwSignal::new(Remote::<Profile>::Loading);
    let username = RwSignal::new(String::new());
    // web_sys::File is not Send
    let photo = RwSignal::new_local(None::<web_sys::File>);
    let preview = RwSignal::new(NO_PHOTO_URL.to_string());
    let saving = RwSignal::new(false);

    let sync = move || ProfileSync::new(ctx.with_value(AppContext::api), profile, BrowserDialogs);

    // Prefill from the current profile
    Effect::new(move |_| {
        spawn_local(async move {
            if sync().load().await.is_ok() {
                profile.with_untracked(|p| {
                    if let Some(p) = p.loaded() {
                        username.set(p.username.clone());
                        preview.set(p.photo.clone().unwrap_or_else(|| NO_PHOTO_URL.to_string()));
                    }
                });
            }
        });
    });

    let on_file = move |file: web_sys::File, origin: FileOrigin| {
        let meta = FileMeta::of(&file);
        let candidate = PhotoCandidate {
            mime_type: meta.mime_type,
            size: meta.size,
        };
        if let Err(e) = screen_photo(origin, &candidate) {
            BrowserDialogs.notify(&e.to_string());
            return;
        }
        if let Some(url) = preview_url(&file) {
            preview.set(url);
        }
        photo.set(Some(file));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let name = username.get_untracked();
        let file = photo.get_untracked();
        spawn_local(async move {
            let upload = match file {
                Some(file) => match read_file_bytes(&file).await {
                    Ok(bytes) => Some(PhotoUpload {
                        file_name: file.name(),
                        mime_type: file.type_(),
                        bytes,
                    }),
                    Err(e) => {
                        log::error!("[PROFILE] {}", e);
                        BrowserDialogs.notify("Failed to update profile");
                        let _ = saving.try_set(false);
                        return;
                    }
                },
                None => None,
            };
            let result = sync().update(&name, upload).await;
            let _ = saving.try_set(false);
            if let Ok(next) = result {
                let _ = navigate.try_with_value(|navigate| navigate(&next.path(), Default::default()));
            }
        });
    };

    let delete_photo = move |_| {
        spawn_local(async move {
            if sync().delete_photo().await.is_ok() {
                let _ = photo.try_set(None);
                let _ = preview.try_set(NO_PHOTO_URL.to_string());
            }
        });
    };

    let has_photo = move || {
        photo.with(Option::is_some) || profile.with(|p| p.loaded().is_some_and(|p| p.photo.is_some()))
    };

    view! {
        <div class="edit-profile-page">
            {move || profile.with(|p| match p {
                Remote::Loading => Some(view! { <p class="loading">"Loading..."</p> }.into_any()),
                Remote::Failed(message) => Some(view! { <p class="error">{message.clone()}</p> }.into_any()),
                Remote::Loaded(_) => None,
            })}

            <Show when=move || profile.with(|p| p.loaded().is_some())>
                <form class="edit-profile-form" on:submit=on_submit>
                    <PhotoDropZone on_file=on_file preview=preview />

                    <Show when=has_photo>
                        <button type="button" class="delete-photo-btn" on:click=delete_photo>
                            "Delete Photo"
                        </button>
                    </Show>

                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />

                    <button type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </Show>

            <A href=Route::Profile.path()>"Back"</A>
        </div>
    }
}
