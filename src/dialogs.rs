//! Dialogs
//!
//! Blocking yes/no prompt and fire-and-forget notices.

pub trait Dialogs {
    /// Ask before a destructive action
    fn confirm(&self, message: &str) -> bool;
    /// Tell the user something went wrong (or right)
    fn notify(&self, message: &str);
}

impl<D: Dialogs + ?Sized> Dialogs for &D {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// `window.confirm` / `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(w) => {
                let _ = w.alert_with_message(message);
            }
            None => log::warn!("[NOTICE] {}", message),
        }
    }
}
