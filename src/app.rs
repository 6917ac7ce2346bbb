//! Novel Console App
//!
//! Builds the engine, starts polling and lays out the single page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::{ChapterModal, CreateNovelForm, DashboardPanel, LogPanel, SchedulerPanel, SettingsForm};
use crate::config::ConsoleConfig;
use crate::context::{AppContext, Console};
use crate::shell::WindowShell;
use crate::store::new_app_store;
use crate::transport::FetchTransport;

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    let store = new_app_store();
    let transport = FetchTransport::new(config.api_base.clone(), config.request_timeout());
    let console = Console::new(&config, Rc::new(transport), Rc::new(WindowShell), store);

    log::info!("console ready, api base {}", config.api_base);
    console.poller.start(&config);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(store, console));

    view! {
        <div class="container-fluid py-3">
            <h1 class="h4 mb-3">"AI 小说创作控制台"</h1>
            <SchedulerPanel />
            <div class="row">
                <div class="col-lg-8">
                    <DashboardPanel />
                    <LogPanel />
                </div>
                <div class="col-lg-4">
                    <CreateNovelForm />
                    <SettingsForm />
                </div>
            </div>
            <ChapterModal />
        </div>
    }
}
