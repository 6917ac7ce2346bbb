use leptos::html::Pre;
use leptos::prelude::*;

use crate::render::render_logs;
use crate::store::{use_app_store, ViewModelStoreFields};

/// Creation log tail, kept scrolled to the newest line
#[component]
pub fn LogPanel() -> impl IntoView {
    let store = use_app_store();
    let pre_ref = NodeRef::<Pre>::new();
    let text = Memo::new(move |_| render_logs(&store.logs().read()));

    Effect::new(move |_| {
        text.track();
        if let Some(pre) = pre_ref.get() {
            pre.set_scroll_top(pre.scroll_height());
        }
    });

    view! {
        <div class="card mt-4">
            <div class="card-body">
                <h6 class="card-title">"创作日志"</h6>
                <pre id="log-output" class="log-box" node_ref=pre_ref>{move || text.get()}</pre>
            </div>
        </div>
    }
}
