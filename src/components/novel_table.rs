//! Novel Table Component
//!
//! Rebuilt from scratch on every dashboard change. Each row control gets
//! exactly one click handler; busy state comes from the store, not the
//! button element, so it survives the rebuild.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CommandButton;
use crate::context::use_app_context;
use crate::render::{DashboardView, NovelRow, RowAction};

#[component]
pub fn NovelTable(dashboard: Memo<DashboardView>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body">
                <h6 class="card-title">"小说进度"</h6>
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"标题"</th>
                            <th>"类型"</th>
                            <th>"状态"</th>
                            <th>"进度"</th>
                            <th>"章节"</th>
                            <th>"字数"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody id="novel-table-body">
                        {move || {
                            dashboard
                                .with(|d| d.rows.clone())
                                .into_iter()
                                .map(|row| view! { <NovelRowView row=row /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn NovelRowView(row: NovelRow) -> impl IntoView {
    let novel_id = row.novel_id;
    let style = row.progress_style();

    view! {
        <tr>
            <td>{novel_id}</td>
            <td>{row.title}</td>
            <td>{row.genre}</td>
            <td>{row.status}</td>
            <td>
                <div class="progress" style="height: 18px;">
                    <div class="progress-bar" role="progressbar" style=style>
                        {format!("{}%", row.percent)}
                    </div>
                </div>
            </td>
            <td>{row.chapters}</td>
            <td>{row.words}</td>
            <td class="text-nowrap">
                {row
                    .actions
                    .into_iter()
                    .map(|action| view! { <RowButton action=action novel_id=novel_id /> })
                    .collect_view()}
            </td>
        </tr>
    }
}

#[component]
fn RowButton(action: RowAction, novel_id: u32) -> impl IntoView {
    let ctx = use_app_context();

    let on_press = Callback::new(move |_| {
        let console = ctx.console();
        match action {
            RowAction::Export => console.dispatcher.export(novel_id),
            RowAction::Generate => spawn_local(async move {
                console.dispatcher.generate(novel_id).await;
            }),
            RowAction::Delete => spawn_local(async move {
                console.dispatcher.delete(novel_id).await;
            }),
            // failures are alerted by the controller
            RowAction::ViewChapters => spawn_local(async move {
                let _ = console.detail.open(novel_id).await;
            }),
        }
    });

    view! {
        <CommandButton
            control=action.control_key(novel_id)
            label=action.label()
            busy_label=action.busy_label()
            button_class=action.css_class()
            on_press=on_press
        />
    }
}
