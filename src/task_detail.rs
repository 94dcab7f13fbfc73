//! Task Detail
//!
//! One task by id, and which of its attachments is open in the viewer.

use crate::api::TaskApi;
use crate::error::{AppResult, Mutation};
use crate::models::Task;
use crate::store::{Remote, StateCell};

pub async fn load_task<A, C>(api: &A, state: &C, id: &str) -> AppResult<Mutation>
where
    A: TaskApi + ?Sized,
    C: StateCell<Remote<Task>>,
{
    if state.write(|s| *s = Remote::Loading).is_none() {
        return Ok(Mutation::Stale);
    }
    let (outcome, result) = match api.get_task(id).await {
        Ok(task) => (Remote::Loaded(task), Ok(())),
        Err(e) => {
            log::error!("[TASKS] failed to fetch task {}: {}", id, e);
            (Remote::Failed("Failed to load task details".to_string()), Err(e))
        }
    };
    let applied = state.write(|s| *s = outcome).is_some();
    result?;
    Ok(if applied { Mutation::Applied } else { Mutation::Stale })
}

/// Attachment viewer position. Navigation wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gallery {
    len: usize,
    open: Option<usize>,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Index shown in the viewer, None while closed
    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.open {
            self.open = Some((i + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.open {
            self.open = Some((i + self.len - 1) % self.len);
        }
    }
}
