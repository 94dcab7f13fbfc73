//! App Configuration
//!
//! Values fixed at build time.

/// Backend used when `TASKBOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Tasks requested per page
pub const TASKS_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: u32,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::with_api_url(option_env!("TASKBOARD_API_URL"))
    }

    fn with_api_url(url: Option<&str>) -> Self {
        let api_base_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base_url,
            page_size: TASKS_PER_PAGE,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_url(None)
    }
}
