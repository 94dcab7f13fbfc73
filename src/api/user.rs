//! User Endpoints

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::{send, send_json, ApiClient};
use crate::error::ApiError;
use crate::models::{PhotoUpload, Profile};

#[async_trait(?Send)]
pub trait UserApi {
    async fn current_user(&self) -> Result<Profile, ApiError>;
    /// Replace username, and photo when one is given
    async fn update_profile(&self, username: &str, photo: Option<PhotoUpload>) -> Result<(), ApiError>;
    async fn delete_photo(&self) -> Result<(), ApiError>;
}

fn profile_form(username: &str, photo: Option<PhotoUpload>) -> Result<Form, ApiError> {
    let form = Form::new().text("username", username.to_string());
    let Some(photo) = photo else {
        return Ok(form);
    };
    let part = Part::bytes(photo.bytes)
        .file_name(photo.file_name)
        .mime_str(&photo.mime_type)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(form.part("photo", part))
}

#[async_trait(?Send)]
impl UserApi for ApiClient {
    async fn current_user(&self) -> Result<Profile, ApiError> {
        send_json(self.request(Method::GET, "/users/me")).await
    }

    async fn update_profile(&self, username: &str, photo: Option<PhotoUpload>) -> Result<(), ApiError> {
        let form = profile_form(username, photo)?;
        send(self.request(Method::PUT, "/users").multipart(form)).await?;
        Ok(())
    }

    async fn delete_photo(&self) -> Result<(), ApiError> {
        send(self.request(Method::DELETE, "/users/photo")).await?;
        Ok(())
    }
}
