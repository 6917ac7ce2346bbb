//! Browser Shell
//!
//! Blocking dialogs and new-tab navigation behind a trait so the command
//! and detail flows can run without a window.

use leptos::prelude::window;

pub trait BrowserShell {
    /// Blocking notice
    fn alert(&self, message: &str);
    /// Blocking yes/no; `false` when the dialog cannot be shown
    fn confirm(&self, message: &str) -> bool;
    fn open_tab(&self, url: &str);
}

/// `window.alert` / `window.confirm` / `window.open`
pub struct WindowShell;

impl BrowserShell for WindowShell {
    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn open_tab(&self, url: &str) {
        if let Err(e) = window().open_with_url_and_target(url, "_blank") {
            log::warn!("could not open {}: {:?}", url, e);
        }
    }
}
