//! Search Filter
//!
//! Narrows already-fetched tasks by title. Never touches the source list.

use crate::models::Task;

/// Case-insensitive substring match on the title
pub fn title_matches(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(&query.to_lowercase())
}

/// Tasks whose title contains `query`, in list order
pub fn filter_by_title<'a>(items: &'a [Task], query: &str) -> Vec<&'a Task> {
    items.iter().filter(|task| title_matches(task, query)).collect()
}
