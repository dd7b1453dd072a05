//! Line Chart Component
//!
//! Timeseries counts as SVG polylines. Axis labels and legend are HTML.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{polyline_points, timeseries_chart, x_position};
use crate::models::TimeseriesPoint;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const GRID_LINES: usize = 4;

#[component]
pub fn LineChartView(#[prop(into)] points: Signal<Option<Arc<Vec<TimeseriesPoint>>>>) -> impl IntoView {
    let chart = Memo::new(move |_| {
        points
            .get()
            .map(|p| timeseries_chart(&p))
            .unwrap_or_default()
    });

    view! {
        <div class="chart line-chart">
            <div class="line-chart-plot">
                <span class="axis-max">{move || format!("{}", chart.get().max_value())}</span>
                <svg
                    viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                    preserveAspectRatio="none"
                    class="chart-canvas"
                >
                    {(0..=GRID_LINES)
                        .map(|i| {
                            let y = HEIGHT * i as f64 / GRID_LINES as f64;
                            view! { <line x1="0" x2=WIDTH y1=y y2=y class="grid-line" /> }
                        })
                        .collect_view()}
                    {move || {
                        let chart = chart.get();
                        let max = chart.max_value();
                        chart
                            .series
                            .into_iter()
                            .map(|series| view! {
                                <polyline
                                    points=polyline_points(&series.values, max, WIDTH, HEIGHT)
                                    fill="none"
                                    stroke=series.color
                                    stroke-width="2"
                                    vector-effect="non-scaling-stroke"
                                />
                            })
                            .collect_view()
                    }}
                </svg>
            </div>
            <div class="axis-labels">
                {move || {
                    let labels = chart.get().labels;
                    let count = labels.len();
                    labels
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let left = x_position(i, count, 100.0);
                            view! { <span class="axis-label" style=format!("left: {:.2}%", left)>{label}</span> }
                        })
                        .collect_view()
                }}
            </div>
            <ul class="chart-legend">
                {move || {
                    chart
                        .get()
                        .series
                        .into_iter()
                        .map(|s| view! {
                            <li>
                                <span class="legend-swatch" style=format!("background-color: {}", s.color)></span>
                                {s.label}
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
