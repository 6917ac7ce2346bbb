//! Create Novel Form Component
//!
//! Collects a new novel plan. A blank title is refused locally; the rest
//! falls back to defaults. The form resets after the plan is accepted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dispatch::{CommandOutcome, ControlKey};
use crate::models::{NovelCreate, DEFAULT_CHAPTER_COUNT};
use crate::store::store_is_busy;

#[component]
pub fn CreateNovelForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (genre, set_genre) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (chapters, set_chapters) = signal(DEFAULT_CHAPTER_COUNT.to_string());
    let busy = move || store_is_busy(&ctx.store, ControlKey::CreateNovel);

    let reset = move || {
        set_title.set(String::new());
        set_genre.set(String::new());
        set_description.set(String::new());
        set_chapters.set(DEFAULT_CHAPTER_COUNT.to_string());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let console = ctx.console();
        let novel = match NovelCreate::from_form(
            &title.get_untracked(),
            &genre.get_untracked(),
            &description.get_untracked(),
            &chapters.get_untracked(),
        ) {
            Ok(novel) => novel,
            Err(notice) => {
                console.shell.alert(notice);
                return;
            }
        };

        spawn_local(async move {
            if console.dispatcher.create(novel).await == CommandOutcome::Completed {
                reset();
            }
        });
    };

    view! {
        <form id="create-novel-form" class="card mb-4" on:submit=on_submit>
            <div class="card-body">
                <h6 class="card-title">"新建小说计划"</h6>
                <div class="row g-2">
                    <div class="col-md-4">
                        <input
                            id="novel-title"
                            class="form-control"
                            type="text"
                            placeholder="小说标题"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-3">
                        <input
                            id="novel-genre"
                            class="form-control"
                            type="text"
                            placeholder="类型，如：玄幻"
                            prop:value=move || genre.get()
                            on:input=move |ev| set_genre.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-2">
                        <input
                            id="novel-chapters"
                            class="form-control"
                            type="number"
                            min="1"
                            prop:value=move || chapters.get()
                            on:input=move |ev| set_chapters.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-3">
                        <button type="submit" class="btn btn-primary w-100" disabled=busy>
                            {move || if busy() { "创建中..." } else { "创建" }}
                        </button>
                    </div>
                    <div class="col-12">
                        <textarea
                            id="novel-outline"
                            class="form-control"
                            rows="3"
                            placeholder="故事梗概（可选）"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>
            </div>
        </form>
    }
}
