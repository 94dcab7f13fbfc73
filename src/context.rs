//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::session::SessionStore;

/// Session store that also tells views when the token changes
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    /// Bumped on every set/clear - read
    version: ReadSignal<u32>,
    /// Bumped on every set/clear - write
    set_version: WriteSignal<u32>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (version, set_version) = signal(0u32);
        Self {
            store,
            version,
            set_version,
        }
    }

    /// Underlying store, read without subscribing
    pub fn store(&self) -> Arc<dyn SessionStore> {
        self.store.clone()
    }
}

impl SessionStore for Session {
    /// Subscribes the calling view to session changes
    fn get(&self) -> Option<String> {
        self.version.track();
        self.store.get()
    }

    fn set(&self, token: &str) {
        self.store.set(token);
        self.set_version.update(|v| *v += 1);
    }

    fn clear(&self) {
        self.store.clear();
        self.set_version.update(|v| *v += 1);
    }
}

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    pub session: Session,
    pub config: Arc<AppConfig>,
}

impl AppContext {
    pub fn new(session: Session, config: AppConfig) -> Self {
        Self {
            session,
            config: Arc::new(config),
        }
    }

    /// Client that reads the token at request time
    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.config.api_base_url, self.session.store())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
