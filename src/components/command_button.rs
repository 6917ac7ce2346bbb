//! Command Button Component
//!
//! Button bound to one control key. Disabled with a progress label while
//! that key has a request in flight, including across table rebuilds.

use leptos::prelude::*;

use crate::dispatch::ControlKey;
use crate::store::{store_is_busy, use_app_store};

/// # Arguments
/// * `control` - Lockout scope; `None` for buttons that never lock
/// * `busy_label` - Caption while busy; the normal label is kept if `None`
/// * `on_press` - Runs once per click
#[component]
pub fn CommandButton(
    control: Option<ControlKey>,
    label: &'static str,
    busy_label: Option<&'static str>,
    button_class: &'static str,
    on_press: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let busy = move || control.is_some_and(|key| store_is_busy(&store, key));

    view! {
        <button
            type="button"
            class=button_class
            disabled=busy
            on:click=move |ev| {
                ev.stop_propagation();
                on_press.run(());
            }
        >
            {move || if busy() { busy_label.unwrap_or(label) } else { label }}
        </button>
    }
}
