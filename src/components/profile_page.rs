//! Profile Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::context::{use_app_context, AppContext};
use crate::dialogs::BrowserDialogs;
use crate::models::Profile;
use crate::profile::{ProfileSync, NO_PHOTO_URL};
use crate::routes::Route;
use crate::store::Remote;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let profile = RwSignal::new(Remote::<Profile>::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            let sync = ProfileSync::new(ctx.with_value(AppContext::api), profile, BrowserDialogs);
            let _ = sync.load().await;
        });
    });

    view! {
        <div class="profile-page">
            {move || match profile.get() {
                Remote::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                Remote::Loaded(p) => view! {
                    <div class="profile-card">
                        <img
                            class="profile-photo"
                            src=p.photo.unwrap_or_else(|| NO_PHOTO_URL.to_string())
                            alt="Profile photo"
                        />
                        <h1 class="profile-username">{p.username}</h1>
                        <p class="profile-email">{p.email}</p>
                        <A href=Route::EditProfile.path()>"Edit Profile"</A>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
