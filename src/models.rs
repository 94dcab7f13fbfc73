//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    /// Attachment URLs, in upload order
    #[serde(rename = "files", default)]
    pub attachments: Option<Vec<String>>,
}

impl Task {
    pub fn attachments(&self) -> &[String] {
        self.attachments.as_deref().unwrap_or(&[])
    }
}

/// One page of the remote task collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(rename = "tasks")]
    pub items: Vec<Task>,
    /// Size of the full remote collection when the page was served
    #[serde(rename = "taskTotalCount")]
    pub total_count: usize,
}

/// The signed-in user's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// None = no photo
    #[serde(default, deserialize_with = "empty_as_none")]
    pub photo: Option<String>,
}

/// Token issued by login/register
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
}

/// Photo ready to be uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
