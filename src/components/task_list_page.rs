//! Task List Page
//!
//! Paged, searchable list of the user's tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::TaskCard;
use crate::context::{use_app_context, AppContext};
use crate::dialogs::BrowserDialogs;
use crate::models::Task;
use crate::task_list::{TaskListState, TaskListStateStoreFields, TaskListSync};

#[component]
pub fn TaskListPage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let page_size = ctx.with_value(|c| c.config.page_size);

    // Dropped with the page; fetches finishing after unmount find no store
    let store = Store::new(TaskListState::default());
    let (search, set_search) = signal(String::new());

    let sync = move || TaskListSync::new(ctx.with_value(AppContext::api), store, BrowserDialogs, page_size);

    // First page on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let _ = sync().reload().await;
        });
    });

    let on_toggle = Callback::new(move |(id, done): (String, bool)| {
        spawn_local(async move {
            let _ = sync().toggle_done(&id, done).await;
        });
    });

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            let _ = sync().delete_task(&id).await;
        });
    });

    let load_more = move |_| {
        spawn_local(async move {
            let _ = sync().load_more().await;
        });
    };

    // Search runs over what is already loaded
    let visible = move || {
        let query = search.get();
        store.with(|s| s.visible(&query).into_iter().cloned().collect::<Vec<Task>>())
    };

    let is_loading = move || store.is_loading().get();
    let has_more = move || store.with(TaskListState::has_more);

    view! {
        <div class="task-list-page">
            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search tasks..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || visible().is_empty() && !is_loading()>
                <p class="empty-hint">"No tasks found"</p>
            </Show>

            <For
                each=visible
                key=|task| (task.id.clone(), task.done)
                children=move |task| view! { <TaskCard task=task on_toggle=on_toggle on_delete=on_delete /> }
            />

            <Show when=has_more>
                <button
                    class="load-more-btn"
                    on:click=load_more
                    disabled=move || !store.with(TaskListState::can_load_more)
                >
                    {move || if is_loading() { "Loading..." } else { "Load More" }}
                </button>
            </Show>

            <p class="item-count">
                {move || format!("{} of {} tasks loaded", store.items().with(|items| items.len()), store.total_count().get())}
            </p>
        </div>
    }
}
