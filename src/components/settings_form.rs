//! Runtime Settings Form Component
//!
//! Posts only the fields that were filled in; the backend keeps the rest.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dispatch::{CommandOutcome, ControlKey};
use crate::models::ConfigUpdate;
use crate::store::store_is_busy;

const NOTHING_TO_SAVE: &str = "请至少填写一项运行参数。";

/// `(id, label, input type)` of each settings field, in `ConfigUpdate` order
const FIELDS: [(&str, &str, &str); 5] = [
    ("cfg-daily-target", "每日新书数量", "number"),
    ("cfg-default-chapters", "默认章节数", "number"),
    ("cfg-max-concurrent", "最大并发请求", "number"),
    ("cfg-max-rpm", "每分钟请求上限", "number"),
    ("cfg-genres", "偏好类型（逗号分隔）", "text"),
];

#[component]
pub fn SettingsForm() -> impl IntoView {
    let ctx = use_app_context();
    let values: [RwSignal<String>; 5] = std::array::from_fn(|_| RwSignal::new(String::new()));
    let busy = move || store_is_busy(&ctx.store, ControlKey::SaveSettings);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let console = ctx.console();
        let [daily, chapters, concurrent, rpm, genres] = values.map(|v| v.get_untracked());
        let update = ConfigUpdate::from_form(&daily, &chapters, &concurrent, &rpm, &genres);
        if update.is_empty() {
            console.shell.alert(NOTHING_TO_SAVE);
            return;
        }

        spawn_local(async move {
            if console.dispatcher.save_settings(update).await == CommandOutcome::Completed {
                for value in values {
                    value.set(String::new());
                }
            }
        });
    };

    view! {
        <form id="config-form" class="card mb-4" on:submit=on_submit>
            <div class="card-body">
                <h6 class="card-title">"运行参数"</h6>
                <div class="row g-2">
                    {FIELDS
                        .into_iter()
                        .zip(values)
                        .map(|((id, label, kind), value)| view! {
                            <div class="col-md-4">
                                <label class="form-label small" for=id>{label}</label>
                                <input
                                    id=id
                                    class="form-control form-control-sm"
                                    type=kind
                                    min=(kind == "number").then_some("0")
                                    prop:value=move || value.get()
                                    on:input=move |ev| value.set(event_target_value(&ev))
                                />
                            </div>
                        })
                        .collect_view()}
                    <div class="col-md-4 d-flex align-items-end">
                        <button type="submit" class="btn btn-outline-primary btn-sm w-100" disabled=busy>
                            {move || if busy() { "保存中..." } else { "保存" }}
                        </button>
                    </div>
                </div>
            </div>
        </form>
    }
}
