//! Task List Synchronizer
//!
//! Accumulates task pages into one growing list and applies toggle/delete
//! results once the server has confirmed them.

use std::collections::HashSet;

use reactive_stores::Store;

use crate::api::TaskApi;
use crate::dialogs::Dialogs;
use crate::error::{AppResult, Mutation};
use crate::models::{Task, TaskPage};
use crate::search::filter_by_title;
use crate::store::StateCell;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Client-side view of the remote task collection
#[derive(Clone, Debug, PartialEq, Store)]
pub struct TaskListState {
    /// Fetched tasks in page order
    pub items: Vec<Task>,
    /// Last page requested, 1-based
    pub page_number: u32,
    /// Remote collection size as of the last page
    pub total_count: usize,
    pub is_loading: bool,
    /// Bumped by `reset`; fetches issued before it are dropped on completion
    pub generation: u32,
}

/// Identifies one page request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u32,
    pub page: u32,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_number: 1,
            total_count: 0,
            is_loading: false,
            generation: 0,
        }
    }
}

impl TaskListState {
    pub fn has_more(&self) -> bool {
        self.items.len() < self.total_count
    }

    /// Whether a "load more" control should be enabled
    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.is_loading
    }

    /// Tasks to display for the current search query
    pub fn visible(&self, query: &str) -> Vec<&Task> {
        filter_by_title(&self.items, query)
    }

    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.is_loading = true;
        FetchTicket {
            generation: self.generation,
            page,
        }
    }

    /// Append a fetched page. Returns false when the ticket is from an older generation.
    ///
    /// Tasks already held (same id) are skipped, so an overlapping page never duplicates.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, page: TaskPage) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let mut known: HashSet<String> = self.items.iter().map(|t| t.id.clone()).collect();
        for task in page.items {
            if known.insert(task.id.clone()) {
                self.items.push(task);
            } else {
                log::debug!("[TASKS] skipping duplicate task {}", task.id);
            }
        }
        self.total_count = page.total_count;
        self.is_loading = false;
        true
    }

    pub fn fail_fetch(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        true
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        if ticket.generation == self.generation {
            return true;
        }
        log::debug!(
            "[TASKS] page {} of generation {} superseded by generation {}",
            ticket.page,
            ticket.generation,
            self.generation
        );
        false
    }

    /// Move the cursor one page forward, returning the new page number
    pub fn advance_page(&mut self) -> u32 {
        self.page_number += 1;
        self.page_number
    }

    pub fn set_done(&mut self, id: &str, done: bool) -> bool {
        match self.items.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|task| task.id != id);
        let removed = self.items.len() < before;
        if removed {
            self.total_count = self.total_count.saturating_sub(1);
        }
        removed
    }

    /// Forget everything fetched so far and start a new generation
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        };
    }
}

/// Drives a `TaskListState` against the task endpoints.
pub struct TaskListSync<A, C, D> {
    api: A,
    state: C,
    dialogs: D,
    page_size: u32,
}

impl<A, C, D> TaskListSync<A, C, D>
where
    A: TaskApi,
    C: StateCell<TaskListState>,
    D: Dialogs,
{
    pub fn new(api: A, state: C, dialogs: D, page_size: u32) -> Self {
        Self {
            api,
            state,
            dialogs,
            page_size,
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Fetch page `page` and append it
    pub async fn fetch_page(&self, page: u32) -> AppResult<Mutation> {
        let Some(ticket) = self.state.write(|s| s.begin_fetch(page)) else {
            return Ok(Mutation::Stale);
        };
        log::debug!("[TASKS] fetching page {} (generation {})", page, ticket.generation);

        match self.api.list_tasks(page, self.page_size).await {
            Ok(result) => {
                let count = result.items.len();
                let total = result.total_count;
                if self.state.write(|s| s.finish_fetch(ticket, result)) == Some(true) {
                    log::info!("[TASKS] page {} loaded: {} tasks, {} total", page, count, total);
                    Ok(Mutation::Applied)
                } else {
                    log::debug!("[TASKS] dropped stale page {}", page);
                    Ok(Mutation::Stale)
                }
            }
            Err(e) => {
                if self.state.write(|s| s.fail_fetch(ticket)) != Some(true) {
                    return Ok(Mutation::Stale);
                }
                log::error!("[TASKS] failed to fetch page {}: {}", page, e);
                self.dialogs.notify("Failed to load tasks");
                Err(e.into())
            }
        }
    }

    /// Drop all fetched tasks and fetch the first page again
    pub async fn reload(&self) -> AppResult<Mutation> {
        if self.state.write(TaskListState::reset).is_none() {
            return Ok(Mutation::Stale);
        }
        self.fetch_page(1).await
    }

    /// Advance the cursor and fetch the next page.
    ///
    /// Callers disable this once everything is loaded; calling it anyway just fetches again.
    pub async fn load_more(&self) -> AppResult<Mutation> {
        let Some(page) = self.state.write(TaskListState::advance_page) else {
            return Ok(Mutation::Stale);
        };
        self.fetch_page(page).await
    }

    /// Ask the server to flip `done`, then apply whatever it echoes back
    pub async fn toggle_done(&self, id: &str, current_done: bool) -> AppResult<Mutation> {
        match self.api.set_task_done(id, !current_done).await {
            Ok(updated) => {
                if self.state.write(|s| s.set_done(id, updated.done)) == Some(true) {
                    Ok(Mutation::Applied)
                } else {
                    log::debug!("[TASKS] toggled task {} no longer listed", id);
                    Ok(Mutation::Stale)
                }
            }
            Err(e) => {
                log::error!("[TASKS] failed to toggle task {}: {}", id, e);
                self.dialogs.notify("Failed to update task status");
                Err(e.into())
            }
        }
    }

    /// Delete after confirmation; the task leaves the list only once the server agrees
    pub async fn delete_task(&self, id: &str) -> AppResult<Mutation> {
        if !self.dialogs.confirm(DELETE_PROMPT) {
            return Ok(Mutation::Declined);
        }
        match self.api.delete_task(id).await {
            Ok(()) => {
                if self.state.write(|s| s.remove(id)) == Some(true) {
                    log::info!("[TASKS] deleted task {}", id);
                    Ok(Mutation::Applied)
                } else {
                    Ok(Mutation::Stale)
                }
            }
            Err(e) => {
                log::error!("[TASKS] failed to delete task {}: {}", id, e);
                self.dialogs.notify("Failed to delete task");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::{Owner, WithUntracked};

    use super::*;
    use crate::error::AppError;
    use crate::testing::{task, FakeBackend, RecordingDialogs};

    type TestSync = TaskListSync<FakeBackend, Rc<RefCell<TaskListState>>, RecordingDialogs>;

    fn sync_with(backend: &FakeBackend, dialogs: &RecordingDialogs) -> TestSync {
        TaskListSync::new(backend.clone(), Rc::new(RefCell::new(TaskListState::default())), dialogs.clone(), 5)
    }

    fn ids(state: &TaskListState) -> Vec<String> {
        state.items.iter().map(|t| t.id.clone()).collect()
    }

    fn three_pages() -> FakeBackend {
        FakeBackend::new()
            .with_page(1, vec![task("1", "Buy milk"), task("2", "Walk dog")], 5)
            .with_page(2, vec![task("3", "Pay rent"), task("4", "Call mom")], 5)
            .with_page(3, vec![task("5", "Milk the cow")], 5)
    }

    #[tokio::test]
    async fn test_pages_accumulate_in_order() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);

        assert_eq!(sync.fetch_page(1).await, Ok(Mutation::Applied));
        assert_eq!(sync.load_more().await, Ok(Mutation::Applied));
        assert_eq!(sync.load_more().await, Ok(Mutation::Applied));

        let state = sync.state().borrow();
        assert_eq!(ids(&state), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(state.page_number, 3);
        assert_eq!(state.total_count, 5);
        assert!(!state.is_loading);
        assert!(!state.has_more());
        assert_eq!(backend.calls(), vec!["list_tasks 1 5", "list_tasks 2 5", "list_tasks 3 5"]);
    }

    #[tokio::test]
    async fn test_load_more_past_the_end_just_fetches() {
        let backend = FakeBackend::new().with_page(1, vec![task("1", "Only")], 1);
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);

        sync.fetch_page(1).await.unwrap();
        assert!(!sync.state().borrow().can_load_more());

        assert_eq!(sync.load_more().await, Ok(Mutation::Applied));
        let state = sync.state().borrow();
        assert_eq!(ids(&state), vec!["1"]);
        // the empty page reports an empty collection
        assert_eq!(state.total_count, 0);
        assert_eq!(state.page_number, 2);
        assert!(dialogs.notices().is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_items_and_notifies() {
        let backend = FakeBackend::new()
            .with_page(1, vec![task("1", "a"), task("2", "b")], 4)
            .with_failing_page(2);
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);

        sync.fetch_page(1).await.unwrap();
        let result = sync.load_more().await;

        assert!(matches!(result, Err(AppError::Request(_))));
        let state = sync.state().borrow();
        assert_eq!(ids(&state), vec!["1", "2"]);
        assert_eq!(state.total_count, 4);
        assert!(!state.is_loading);
        assert_eq!(dialogs.notices(), vec!["Failed to load tasks"]);
    }

    #[tokio::test]
    async fn test_reload_does_not_duplicate() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);

        sync.reload().await.unwrap();
        sync.reload().await.unwrap();

        let state = sync.state().borrow();
        assert_eq!(ids(&state), vec!["1", "2"]);
        assert_eq!(state.page_number, 1);
        assert_eq!(state.generation, 2);
    }

    #[tokio::test]
    async fn test_overlapping_page_skips_known_ids() {
        let backend = FakeBackend::new()
            .with_page(1, vec![task("1", "a"), task("2", "b")], 4)
            .with_page(2, vec![task("2", "b"), task("3", "c")], 4);
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);

        sync.fetch_page(1).await.unwrap();
        sync.load_more().await.unwrap();

        assert_eq!(ids(&sync.state().borrow()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut state = TaskListState::default();
        let old = state.begin_fetch(1);
        state.reset();
        let current = state.begin_fetch(1);
        assert_eq!(old, FetchTicket { generation: 0, page: 1 });
        assert_eq!(current, FetchTicket { generation: 1, page: 1 });

        let page = TaskPage {
            items: vec![task("1", "a")],
            total_count: 1,
        };
        assert!(!state.finish_fetch(old, page.clone()));
        assert!(state.items.is_empty());
        assert!(state.is_loading);
        assert!(!state.fail_fetch(old));
        assert!(state.is_loading);

        assert!(state.finish_fetch(current, page));
        assert_eq!(state.items.len(), 1);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_toggle_applies_echoed_value_only_to_target() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();
        let before = sync.state().borrow().clone();

        assert_eq!(sync.toggle_done("2", false).await, Ok(Mutation::Applied));

        let after = sync.state().borrow();
        assert!(after.items[1].done);
        assert_eq!(after.items[0], before.items[0]);
        assert_eq!(after.total_count, before.total_count);
        assert_eq!(backend.calls().last().unwrap(), "set_task_done 2 true");
    }

    #[tokio::test]
    async fn test_toggle_trusts_server_over_prediction() {
        let backend = three_pages().echo_done(false);
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();

        sync.toggle_done("1", false).await.unwrap();

        assert!(!sync.state().borrow().items[0].done);
    }

    #[tokio::test]
    async fn test_toggle_failure_leaves_items() {
        let backend = three_pages().failing_toggle();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();
        let before = sync.state().borrow().clone();

        assert!(sync.toggle_done("1", false).await.is_err());

        assert_eq!(*sync.state().borrow(), before);
        assert_eq!(dialogs.notices(), vec!["Failed to update task status"]);
    }

    #[tokio::test]
    async fn test_toggle_after_delete_is_ignored() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();

        sync.delete_task("1").await.unwrap();
        assert_eq!(sync.toggle_done("1", false).await, Ok(Mutation::Stale));
        assert_eq!(ids(&sync.state().borrow()), vec!["2"]);
        assert!(dialogs.notices().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_and_decrements() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();

        assert_eq!(sync.delete_task("1").await, Ok(Mutation::Applied));

        let state = sync.state().borrow();
        assert!(state.items.iter().all(|t| t.id != "1"));
        assert_eq!(state.total_count, 4);
        assert_eq!(dialogs.prompts(), vec![DELETE_PROMPT]);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_state() {
        let backend = three_pages().failing_delete();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();
        let before = sync.state().borrow().clone();

        assert!(sync.delete_task("1").await.is_err());

        assert_eq!(*sync.state().borrow(), before);
        assert_eq!(dialogs.notices(), vec!["Failed to delete task"]);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(false);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();

        assert_eq!(sync.delete_task("1").await, Ok(Mutation::Declined));

        assert_eq!(backend.calls(), vec!["list_tasks 1 5"]);
        assert_eq!(sync.state().borrow().items.len(), 2);
    }

    #[tokio::test]
    async fn test_search_reads_without_touching_items() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let sync = sync_with(&backend, &dialogs);
        sync.fetch_page(1).await.unwrap();
        sync.load_more().await.unwrap();
        sync.load_more().await.unwrap();

        let state = sync.state().borrow();
        let found: Vec<&str> = state.visible("MILK").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(found, vec!["1", "5"]);
        assert_eq!(state.visible("").len(), 5);
        assert_eq!(state.items.len(), 5);
    }

    #[tokio::test]
    async fn test_fetch_after_unmount_is_dropped() {
        let backend = three_pages();
        let dialogs = RecordingDialogs::answering(true);
        let root = Owner::new();
        root.set();

        let mounted = Store::new(TaskListState::default());
        let sync = TaskListSync::new(backend.clone(), mounted, dialogs.clone(), 5);
        assert_eq!(sync.fetch_page(1).await, Ok(Mutation::Applied));
        assert_eq!(mounted.with_untracked(|s| s.items.len()), 2);

        let page = Owner::new();
        let unmounted = page.with(|| Store::new(TaskListState::default()));
        page.cleanup();
        let sync = TaskListSync::new(backend.clone(), unmounted, dialogs.clone(), 5);

        assert_eq!(sync.fetch_page(1).await, Ok(Mutation::Stale));
        assert_eq!(sync.reload().await, Ok(Mutation::Stale));
        assert_eq!(backend.calls(), vec!["list_tasks 1 5"]);
        assert!(dialogs.notices().is_empty());
    }
}
