//! Session Store
//!
//! The single credential that decides whether the user is signed in.

use std::sync::{Arc, RwLock};

/// localStorage key holding the token
pub const TOKEN_KEY: &str = "token";

/// Holder of the opaque access token.
///
/// Implementations never fail: an unusable backend reads as "no token".
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }
    fn set(&self, token: &str) {
        (**self).set(token)
    }
    fn clear(&self) {
        (**self).clear()
    }
}

/// Browser `localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStore for LocalStorageSession {
    fn get(&self) -> Option<String> {
        Self::storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("[SESSION] localStorage rejected the token");
                }
            }
            None => log::warn!("[SESSION] localStorage unavailable, token not kept"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Process-local session, used where there is no browser
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Arc<RwLock<Option<String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        session.set(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}
