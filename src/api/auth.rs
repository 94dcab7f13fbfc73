//! Auth Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::{send_json, ApiClient};
use crate::error::ApiError;
use crate::models::AccessToken;

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, ApiError>;
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AccessToken, ApiError>;
}

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, ApiError> {
        let args = LoginArgs { email, password };
        send_json(self.request(Method::POST, "/auth/login").json(&args)).await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<AccessToken, ApiError> {
        let args = RegisterArgs { username, email, password };
        send_json(self.request(Method::POST, "/auth/register").json(&args)).await
    }
}
