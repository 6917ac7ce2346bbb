//! Application Context
//!
//! Shared handles provided via the Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::Api;
use crate::config::ConsoleConfig;
use crate::detail::DetailController;
use crate::dispatch::Dispatcher;
use crate::poller::Poller;
use crate::shell::BrowserShell;
use crate::store::AppStore;
use crate::transport::Transport;

/// Engine behind the page: polling, commands, chapter viewer
#[derive(Clone)]
pub struct Console {
    pub poller: Poller,
    pub dispatcher: Dispatcher,
    pub detail: DetailController,
    /// Notices raised by the page itself, e.g. form validation
    pub shell: Rc<dyn BrowserShell>,
}

impl Console {
    pub fn new(
        config: &ConsoleConfig,
        transport: Rc<dyn Transport>,
        shell: Rc<dyn BrowserShell>,
        store: AppStore,
    ) -> Self {
        let api = Api::new(transport);
        let poller = Poller::new(api.clone(), store, config.log_limit);
        let dispatcher = Dispatcher::new(
            api.clone(),
            store,
            poller.clone(),
            shell.clone(),
            config.api_base.clone(),
        );
        let detail = DetailController::new(api, store, shell.clone());
        Self {
            poller,
            dispatcher,
            detail,
            shell,
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Non-`Send` engine, kept in local arena storage
    console: StoredValue<Console, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, console: Console) -> Self {
        Self {
            store,
            console: StoredValue::new_local(console),
        }
    }

    /// Clone of the engine, to move into a spawned task
    pub fn console(&self) -> Console {
        self.console.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
