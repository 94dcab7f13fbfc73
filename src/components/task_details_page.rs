//! Task Details Page
//!
//! One task with its attachment thumbnails and a wrap-around viewer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::{use_app_context, AppContext};
use crate::models::Task;
use crate::routes::Route;
use crate::store::Remote;
use crate::task_detail::{load_task, Gallery};

#[component]
pub fn TaskDetailsPage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let params = use_params_map();

    let task = RwSignal::new(Remote::<Task>::Loading);
    let gallery = RwSignal::new(Gallery::default());

    // Refetch when the id in the URL changes
    Effect::new(move |_| {
        gallery.set(Gallery::default());
        let Some(id) = params.with(|p| p.get("id")) else {
            task.set(Remote::Failed("Failed to load task details".to_string()));
            return;
        };
        spawn_local(async move {
            let api = ctx.with_value(AppContext::api);
            let _ = load_task(&api, &task, &id).await;
            if let Some(len) = task.try_with_untracked(|t| t.loaded().map(|t| t.attachments().len())).flatten() {
                gallery.set(Gallery::new(len));
            }
        });
    });

    let attachments = move || {
        task.with(|t| t.loaded().map(|t| t.attachments().to_vec()).unwrap_or_default())
    };

    view! {
        <div class="task-details-page">
            <A href=Route::Home.path()>"Back to Tasks"</A>

            {move || match task.get() {
                Remote::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                Remote::Loaded(t) => view! {
                    <div class="task-details">
                        <h1>{t.title}</h1>
                        <p class="task-description">{t.description}</p>
                        <p class="task-status">{if t.done { "✅ Done" } else { "⌛ Pending" }}</p>
                    </div>
                }.into_any(),
            }}

            <div class="thumbnails">
                {move || attachments().into_iter().enumerate().map(|(index, url)| view! {
                    <img
                        class="thumbnail"
                        src=url
                        alt=format!("Attachment {}", index + 1)
                        on:click=move |_| gallery.update(|g| g.open(index))
                    />
                }).collect_view()}
            </div>

            {move || gallery.with(Gallery::current).and_then(|index| {
                let url = attachments().get(index).cloned()?;
                Some(view! {
                    <div class="viewer">
                        <button class="viewer-prev" on:click=move |_| gallery.update(Gallery::prev)>"‹"</button>
                        <img class="viewer-image" src=url alt=format!("Attachment {}", index + 1) />
                        <button class="viewer-next" on:click=move |_| gallery.update(Gallery::next)>"›"</button>
                        <button class="viewer-close" on:click=move |_| gallery.update(Gallery::close)>"✕"</button>
                    </div>
                })
            })}
        </div>
    }
}
