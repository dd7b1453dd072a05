//! Pie Chart Component
//!
//! Application stage split rendered as SVG with an HTML legend.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dashboard::{pie_slices, stage_series};
use crate::models::StagePercents;

const SIZE: f64 = 200.0;

#[component]
pub fn PieChart(#[prop(into)] percents: Signal<Option<Arc<StagePercents>>>) -> impl IntoView {
    let series = move || stage_series(percents.get().as_deref());

    view! {
        <div class="chart pie-chart">
            <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) class="chart-canvas">
                {move || {
                    pie_slices(&series(), SIZE / 2.0, SIZE / 2.0, SIZE / 2.0 - 4.0)
                        .into_iter()
                        .map(|slice| view! {
                            <path
                                d=slice.path
                                fill=slice.color
                                stroke="#fff"
                                stroke-width="1"
                                aria-label=format!("{}: {:.0}%", slice.label, slice.fraction * 100.0)
                            />
                        })
                        .collect_view()
                }}
            </svg>
            <ul class="chart-legend">
                {move || {
                    series()
                        .into_iter()
                        .map(|entry| view! {
                            <li>
                                <span class="legend-swatch" style=format!("background-color: {}", entry.color)></span>
                                {entry.label}
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
