//! Dashboard Panel Component
//!
//! Renders the dashboard slice once per change and hands the result to the
//! stat cards, the trend chart and the novel table.

use leptos::prelude::*;

use crate::components::{NovelTable, StatsCards, TrendPanel};
use crate::render::render_dashboard;
use crate::store::{use_app_store, ViewModelStoreFields};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let store = use_app_store();
    let dashboard = Memo::new(move |_| render_dashboard(&store.dashboard().read()));

    view! {
        <section class="dashboard">
            <StatsCards dashboard=dashboard />
            <TrendPanel dashboard=dashboard />
            <NovelTable dashboard=dashboard />
        </section>
    }
}
