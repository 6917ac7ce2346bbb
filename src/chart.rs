//! Daily Output Trend Chart
//!
//! Chart.js is created on the first render and afterwards only has its data
//! replaced in place.

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::models::DailyProgress;

/// `(labels, series)` pair handed to the chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn from_daily(stats: &[DailyProgress]) -> Self {
        Self {
            labels: stats.iter().map(|d| d.date.clone()).collect(),
            values: stats.iter().map(|d| d.word_count).collect(),
        }
    }
}

pub trait ChartFactory {
    type Chart: ChartHandle;
    fn create(&self, series: &ChartSeries) -> Result<Self::Chart, String>;
}

pub trait ChartHandle {
    fn replace_data(&self, series: &ChartSeries);
}

/// Lazily constructed chart
pub struct TrendChart<F: ChartFactory> {
    factory: F,
    chart: Option<F::Chart>,
}

impl<F: ChartFactory> TrendChart<F> {
    pub fn new(factory: F) -> Self {
        Self { factory, chart: None }
    }

    pub fn render(&mut self, series: &ChartSeries) {
        match &self.chart {
            Some(chart) => chart.replace_data(series),
            None => match self.factory.create(series) {
                Ok(chart) => self.chart = Some(chart),
                // retried on the next render
                Err(e) => log::warn!("chart not created: {}", e),
            },
        }
    }
}

// ========================
// Chart.js binding
// ========================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, catch, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn update(this: &JsChart);

    #[wasm_bindgen(method, getter)]
    fn data(this: &JsChart) -> JsValue;
}

pub struct ChartJsFactory {
    canvas: HtmlCanvasElement,
}

impl ChartJsFactory {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartFactory for ChartJsFactory {
    type Chart = JsChart;

    fn create(&self, series: &ChartSeries) -> Result<JsChart, String> {
        let config = line_chart_config(series)
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        JsChart::new(&self.canvas, &config).map_err(|e| format!("{:?}", e))
    }
}

impl ChartHandle for JsChart {
    fn replace_data(&self, series: &ChartSeries) {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let (Ok(labels), Ok(values)) = (
            series.labels.serialize(&serializer),
            series.values.serialize(&serializer),
        ) else {
            return;
        };

        let data = self.data();
        let dataset = js_sys::Reflect::get(&data, &"datasets".into())
            .map(|sets| js_sys::Array::from(&sets).get(0));
        let applied = js_sys::Reflect::set(&data, &"labels".into(), &labels).and_then(|_| {
            let dataset = dataset?;
            js_sys::Reflect::set(&dataset, &"data".into(), &values)
        });
        match applied {
            Ok(_) => self.update(),
            Err(e) => log::warn!("chart update failed: {:?}", e),
        }
    }
}

fn line_chart_config(series: &ChartSeries) -> serde_json::Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "每日字数",
                "data": series.values,
                "tension": 0.3,
                "borderColor": "#0d6efd",
                "backgroundColor": "rgba(13, 110, 253, 0.1)",
                "fill": true
            }]
        },
        "options": {
            "responsive": true,
            "scales": { "y": { "beginAtZero": true } }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        created: usize,
        updates: Vec<ChartSeries>,
    }

    struct FakeFactory(Rc<RefCell<Calls>>);
    struct FakeChart(Rc<RefCell<Calls>>);

    impl ChartFactory for FakeFactory {
        type Chart = FakeChart;
        fn create(&self, _series: &ChartSeries) -> Result<FakeChart, String> {
            self.0.borrow_mut().created += 1;
            Ok(FakeChart(self.0.clone()))
        }
    }

    impl ChartHandle for FakeChart {
        fn replace_data(&self, series: &ChartSeries) {
            self.0.borrow_mut().updates.push(series.clone());
        }
    }

    fn day(date: &str, words: u64) -> DailyProgress {
        DailyProgress {
            date: date.to_string(),
            novel_count: 0,
            chapter_count: 0,
            word_count: words,
        }
    }

    #[test]
    fn creates_once_then_updates_in_place() {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let mut chart = TrendChart::new(FakeFactory(calls.clone()));

        chart.render(&ChartSeries::from_daily(&[day("2024-05-01", 100)]));
        chart.render(&ChartSeries::from_daily(&[day("2024-05-01", 100), day("2024-05-02", 300)]));
        chart.render(&ChartSeries::default());

        let calls = calls.borrow();
        assert_eq!(calls.created, 1);
        assert_eq!(calls.updates.len(), 2);
        assert_eq!(calls.updates[0].values, vec![100, 300]);
        assert!(calls.updates[1].labels.is_empty());
    }

    #[test]
    fn series_keeps_date_order() {
        let series = ChartSeries::from_daily(&[day("2024-05-01", 1), day("2024-05-02", 2)]);
        assert_eq!(series.labels, vec!["2024-05-01", "2024-05-02"]);
        assert_eq!(series.values, vec![1, 2]);
    }

    #[test]
    fn config_carries_series() {
        let config = line_chart_config(&ChartSeries {
            labels: vec!["d".into()],
            values: vec![7],
        });
        assert_eq!(config["data"]["datasets"][0]["data"], json!([7]));
        assert_eq!(config["type"], "line");
    }
}
