//! Scheduler Panel Component
//!
//! Status label, last heartbeat and the four control buttons, which share
//! one handler parameterized by the action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CommandButton;
use crate::context::use_app_context;
use crate::dispatch::ControlKey;
use crate::format::SchedulerDisplay;
use crate::models::ControlAction;
use crate::store::ViewModelStoreFields;

const CONTROL_CLASSES: [&str; 4] = [
    "btn btn-success btn-sm",
    "btn btn-warning btn-sm ms-1",
    "btn btn-info btn-sm ms-1",
    "btn btn-danger btn-sm ms-1",
];

#[component]
pub fn SchedulerPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let display = Memo::new(move |_| {
        store
            .scheduler()
            .with(|state| state.as_ref().map(SchedulerDisplay::from))
    });
    let heartbeat = move || {
        store
            .scheduler()
            .with(|state| state.as_ref().and_then(|s| s.last_heartbeat.clone()))
    };

    let on_control = move |action: ControlAction| {
        let console = ctx.console();
        spawn_local(async move {
            console.dispatcher.control(action).await;
        });
    };

    view! {
        <div class="card mb-4">
            <div class="card-body d-flex align-items-center flex-wrap gap-2">
                <span>"调度器状态："</span>
                <span
                    id="scheduler-status"
                    class=move || display.get().map_or("text-muted fw-bold", |d| d.css_class())
                >
                    {move || display.get().map_or("未知", |d| d.label())}
                </span>
                {move || heartbeat().map(|at| view! {
                    <small class="text-muted ms-2">"心跳：" {at}</small>
                })}
                <div class="ms-auto">
                    {ControlAction::ALL
                        .into_iter()
                        .zip(CONTROL_CLASSES)
                        .map(|(action, class)| view! {
                            <CommandButton
                                control=Some(ControlKey::Scheduler(action))
                                label=action.label()
                                busy_label=Some("处理中...")
                                button_class=class
                                on_press=Callback::new(move |_| on_control(action))
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
