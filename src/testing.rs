//! Test doubles for the backend and dialogs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{AuthApi, TaskApi, UserApi};
use crate::dialogs::Dialogs;
use crate::error::ApiError;
use crate::models::{AccessToken, PhotoUpload, Profile, Task, TaskPage};

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("about {}", title),
        done: false,
        attachments: None,
    }
}

pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        detail: "boom".to_string(),
    }
}

#[derive(Default)]
struct Backend {
    pages: HashMap<u32, Result<TaskPage, ApiError>>,
    tasks: HashMap<String, Task>,
    /// Overrides the `done` value echoed by a toggle
    echo_done: Option<bool>,
    fail_toggle: bool,
    fail_delete: bool,
    profile: Option<Profile>,
    fail_update: bool,
    fail_delete_photo: bool,
    fail_auth: bool,
    calls: Vec<String>,
}

/// In-memory backend implementing every endpoint trait, recording each call
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Rc<RefCell<Backend>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, items: Vec<Task>, total_count: usize) -> Self {
        for item in &items {
            self.inner.borrow_mut().tasks.insert(item.id.clone(), item.clone());
        }
        self.inner
            .borrow_mut()
            .pages
            .insert(page, Ok(TaskPage { items, total_count }));
        self
    }

    pub fn with_failing_page(self, page: u32) -> Self {
        self.inner.borrow_mut().pages.insert(page, Err(server_error()));
        self
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.inner.borrow_mut().profile = Some(profile);
        self
    }

    pub fn echo_done(self, done: bool) -> Self {
        self.inner.borrow_mut().echo_done = Some(done);
        self
    }

    pub fn failing_toggle(self) -> Self {
        self.inner.borrow_mut().fail_toggle = true;
        self
    }

    pub fn failing_delete(self) -> Self {
        self.inner.borrow_mut().fail_delete = true;
        self
    }

    pub fn failing_update(self) -> Self {
        self.inner.borrow_mut().fail_update = true;
        self
    }

    pub fn failing_delete_photo(self) -> Self {
        self.inner.borrow_mut().fail_delete_photo = true;
        self
    }

    pub fn failing_auth(self) -> Self {
        self.inner.borrow_mut().fail_auth = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: String) {
        self.inner.borrow_mut().calls.push(call);
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeBackend {
    async fn list_tasks(&self, page: u32, limit: u32) -> Result<TaskPage, ApiError> {
        self.record(format!("list_tasks {} {}", page, limit));
        self.inner
            .borrow()
            .pages
            .get(&page)
            .cloned()
            .unwrap_or(Ok(TaskPage { items: vec![], total_count: 0 }))
    }

    async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        self.record(format!("get_task {}", id));
        self.inner.borrow().tasks.get(id).cloned().ok_or(ApiError::Status {
            status: 404,
            detail: "Task not found".to_string(),
        })
    }

    async fn set_task_done(&self, id: &str, done: bool) -> Result<Task, ApiError> {
        self.record(format!("set_task_done {} {}", id, done));
        let inner = self.inner.borrow();
        if inner.fail_toggle {
            return Err(server_error());
        }
        let mut updated = inner.tasks.get(id).cloned().unwrap_or_else(|| task(id, "unknown"));
        updated.done = inner.echo_done.unwrap_or(done);
        Ok(updated)
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_task {}", id));
        if self.inner.borrow().fail_delete {
            return Err(server_error());
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserApi for FakeBackend {
    async fn current_user(&self) -> Result<Profile, ApiError> {
        self.record("current_user".to_string());
        self.inner.borrow().profile.clone().ok_or(ApiError::Status {
            status: 401,
            detail: "Unauthorized".to_string(),
        })
    }

    async fn update_profile(&self, username: &str, photo: Option<PhotoUpload>) -> Result<(), ApiError> {
        let photo_name = photo.map(|p| p.file_name).unwrap_or_else(|| "-".to_string());
        self.record(format!("update_profile {} {}", username, photo_name));
        if self.inner.borrow().fail_update {
            return Err(server_error());
        }
        Ok(())
    }

    async fn delete_photo(&self) -> Result<(), ApiError> {
        self.record("delete_photo".to_string());
        if self.inner.borrow().fail_delete_photo {
            return Err(server_error());
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<AccessToken, ApiError> {
        self.record(format!("login {}", email));
        if self.inner.borrow().fail_auth {
            return Err(ApiError::Status {
                status: 401,
                detail: "Invalid credentials".to_string(),
            });
        }
        Ok(AccessToken {
            access_token: format!("token-for-{}", email),
        })
    }

    async fn register(&self, username: &str, email: &str, _password: &str) -> Result<AccessToken, ApiError> {
        self.record(format!("register {} {}", username, email));
        if self.inner.borrow().fail_auth {
            return Err(ApiError::Status {
                status: 409,
                detail: "Email already in use".to_string(),
            });
        }
        Ok(AccessToken {
            access_token: format!("token-for-{}", username),
        })
    }
}

/// Answers every confirmation the same way and keeps what it was asked and told
#[derive(Clone)]
pub struct RecordingDialogs {
    answer: bool,
    prompts: Rc<RefCell<Vec<String>>>,
    notices: Rc<RefCell<Vec<String>>>,
}

impl RecordingDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Rc::default(),
            notices: Rc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
