//! Trend Panel Component
//!
//! Hosts the Chart.js canvas. The chart object lives in local storage next
//! to the component and is reused for every later snapshot.

use leptos::html::Canvas;
use leptos::prelude::*;

use crate::chart::{ChartJsFactory, TrendChart};
use crate::render::DashboardView;

#[component]
pub fn TrendPanel(dashboard: Memo<DashboardView>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let chart = StoredValue::new_local(None::<TrendChart<ChartJsFactory>>);

    Effect::new(move |_| {
        let series = dashboard.with(|d| d.series.clone());
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        chart.update_value(|chart| {
            chart
                .get_or_insert_with(|| TrendChart::new(ChartJsFactory::new(canvas)))
                .render(&series);
        });
    });

    view! {
        <div class="card mb-4">
            <div class="card-body">
                <h6 class="card-title">"每日产出字数"</h6>
                <canvas id="chart-daily" height="120" node_ref=canvas_ref></canvas>
            </div>
        </div>
    }
}
