//! View Model Store
//!
//! Latest snapshot of every polled resource, the open detail session and
//! the set of controls with a request in flight. Uses Leptos
//! reactive_stores for field-level reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::detail::DetailSession;
use crate::dispatch::ControlKey;
use crate::models::{DashboardSnapshot, LogEntry, SchedulerState};

/// Client-held view model; each slice is replaced wholesale, never merged
#[derive(Clone, Debug, Default, Store)]
pub struct ViewModel {
    pub dashboard: DashboardSnapshot,
    pub logs: Vec<LogEntry>,
    /// `None` until the first successful state poll
    pub scheduler: Option<SchedulerState>,
    pub detail: Option<DetailSession>,
    pub in_flight: HashSet<ControlKey>,
}

/// Type alias for the store
pub type AppStore = Store<ViewModel>;

pub fn new_app_store() -> AppStore {
    Store::new(ViewModel::default())
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_replace_dashboard(store: &AppStore, snapshot: DashboardSnapshot) {
    *store.dashboard().write() = snapshot;
}

pub fn store_replace_logs(store: &AppStore, logs: Vec<LogEntry>) {
    *store.logs().write() = logs;
}

pub fn store_replace_scheduler(store: &AppStore, state: SchedulerState) {
    *store.scheduler().write() = Some(state);
}

/// Tracked read, for views that disable a busy control
pub fn store_is_busy(store: &AppStore, key: ControlKey) -> bool {
    store.in_flight().read().contains(&key)
}
