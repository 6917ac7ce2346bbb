use leptos::prelude::*;

use crate::render::DashboardView;

#[component]
pub fn StatsCards(dashboard: Memo<DashboardView>) -> impl IntoView {
    let card = |title: &'static str, id: &'static str, value: Signal<String>| {
        view! {
            <div class="col-md-4">
                <div class="card stat-card">
                    <div class="card-body">
                        <h6 class="card-title text-muted">{title}</h6>
                        <p class="stat-value" id=id>{move || value.get()}</p>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="row g-3 mb-4">
            {card("小说总数", "total-novels", Signal::derive(move || dashboard.with(|d| d.stats.total_novels.clone())))}
            {card("章节总数", "total-chapters", Signal::derive(move || dashboard.with(|d| d.stats.total_chapters.clone())))}
            {card("累计字数", "total-words", Signal::derive(move || dashboard.with(|d| d.stats.total_words.clone())))}
        </div>
    }
}
