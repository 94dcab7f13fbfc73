//! Task Card Component
//!
//! One task in the list, with done/delete actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::models::Task;
use crate::routes::Route;

#[component]
pub fn TaskCard(
    task: Task,
    /// (id, current done)
    on_toggle: Callback<(String, bool)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let navigate = use_navigate();

    let id = task.id.clone();
    let done = task.done;
    let attachment_count = task.attachments().len();
    let detail_path = Route::Task(task.id.clone()).path();

    view! {
        <div class="task-card">
            <div class="task-summary" on:click=move |_| navigate(&detail_path, Default::default())>
                <h2 class="task-title">{task.title}</h2>
                <p class="task-description">{task.description}</p>
                <p class="task-status">
                    {if done { "✅ Done" } else { "⌛ Pending" }}
                    {(attachment_count > 0).then(|| format!(" · 📎 {}", attachment_count))}
                </p>
            </div>

            <div class="task-actions">
                <button
                    class=if done { "toggle-btn undone" } else { "toggle-btn done" }
                    on:click={
                        let id = id.clone();
                        move |_| on_toggle.run((id.clone(), done))
                    }
                >
                    {if done { "Undone" } else { "Done" }}
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
