//! Task Endpoints

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use super::{send, send_json, ApiClient};
use crate::error::ApiError;
use crate::models::{Task, TaskPage};

#[async_trait(?Send)]
pub trait TaskApi {
    /// One page of tasks, 1-based
    async fn list_tasks(&self, page: u32, limit: u32) -> Result<TaskPage, ApiError>;
    async fn get_task(&self, id: &str) -> Result<Task, ApiError>;
    /// Returns the task as the server stored it
    async fn set_task_done(&self, id: &str, done: bool) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Serialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}

fn task_path(id: &str) -> String {
    format!("/tasks/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    async fn list_tasks(&self, page: u32, limit: u32) -> Result<TaskPage, ApiError> {
        send_json(self.request(Method::GET, "/tasks").query(&PageQuery { page, limit })).await
    }

    async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        send_json(self.request(Method::GET, &task_path(id))).await
    }

    async fn set_task_done(&self, id: &str, done: bool) -> Result<Task, ApiError> {
        let form = Form::new().text("done", done.to_string());
        send_json(self.request(Method::PATCH, &task_path(id)).multipart(form)).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        send(self.request(Method::DELETE, &task_path(id))).await?;
        Ok(())
    }
}
