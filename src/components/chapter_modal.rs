//! Chapter Modal Component
//!
//! Chapter viewer for the open detail session. Switching chapters keeps
//! the modal open; closing it discards the session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::render::{chapter_options, render_chapter, ChapterView};
use crate::store::ViewModelStoreFields;

#[component]
pub fn ChapterModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_open = move || store.detail().with(|d| d.is_some());
    let chapter = Memo::new(move |_| {
        store
            .detail()
            .with(|d| d.as_ref().map(|s| render_chapter(&s.current)))
    });
    let options = Memo::new(move |_| {
        store
            .detail()
            .with(|d| d.as_ref().map(chapter_options).unwrap_or_default())
    });
    let selected_id = move || store.detail().with(|d| d.as_ref().map(|s| s.selected_id));

    let on_select = move |ev: web_sys::Event| {
        let Ok(chapter_id) = event_target_value(&ev).parse::<u32>() else {
            return;
        };
        let console = ctx.console();
        spawn_local(async move {
            // failures are alerted by the controller
            let _ = console.detail.select(chapter_id).await;
        });
    };
    let on_close = move |_: web_sys::MouseEvent| ctx.console().detail.close();

    let field = move |pick: fn(&ChapterView) -> String| {
        move || chapter.with(|c| c.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <Show when=is_open>
            <div class="chapter-modal-backdrop" on:click=on_close>
                <div id="chapterModal" class="chapter-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="chapter-modal-header">
                        <h5 id="chapter-modal-title">{field(|c| c.heading.clone())}</h5>
                        <button type="button" class="btn-close" aria-label="关闭" on:click=on_close></button>
                    </div>
                    <select id="chapter-modal-select" class="form-select form-select-sm mb-2" on:change=on_select>
                        {move || {
                            options
                                .get()
                                .into_iter()
                                .map(|(id, label)| view! {
                                    <option value=id.to_string() prop:selected=move || selected_id() == Some(id)>
                                        {label}
                                    </option>
                                })
                                .collect_view()
                        }}
                    </select>
                    <p id="chapter-modal-meta" class="text-muted small">{field(|c| c.meta.clone())}</p>
                    <h6>"本章小结"</h6>
                    <p id="chapter-modal-outline" class="chapter-outline">{field(|c| c.outline.clone())}</p>
                    <h6>"正文"</h6>
                    <div id="chapter-modal-content" class="chapter-content">{field(|c| c.content.clone())}</div>
                </div>
            </div>
        </Show>
    }
}
