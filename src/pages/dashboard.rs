//! Dashboard Page
//!
//! Headline cards, stage pie, weekly trend and the todo list.

use leptos::prelude::*;

use crate::components::{LineChartView, PieChart, SummaryCardView, TodoPanel};
use crate::context::use_app_context;
use crate::dashboard::summary_cards;
use crate::query::{use_query, QueryKey};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let statistics = {
        let api = ctx.api.clone();
        use_query(QueryKey::STATISTICS, move || {
            let api = api.clone();
            async move { api.statistics().await }
        })
    };
    let percents = {
        let api = ctx.api.clone();
        use_query(QueryKey::PERCENTS, move || {
            let api = api.clone();
            async move { api.percents().await }
        })
    };
    let timeseries = {
        let api = ctx.api.clone();
        let window = ctx.timeseries_window();
        use_query(QueryKey::TIMESERIES, move || {
            let api = api.clone();
            async move { api.timeseries(&window).await }
        })
    };

    let refresh = move |_| {
        statistics.refetch();
        percents.refetch();
        timeseries.refetch();
    };
    let is_loading = move || statistics.is_loading.get() || percents.is_loading.get() || timeseries.is_loading.get();
    let greeting = move || match store.user().get() {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome back".to_string(),
    };

    view! {
        <div class="dashboard">
            <header class="page-header">
                <h1>{greeting}</h1>
                <button class="secondary-btn" prop:disabled=is_loading on:click=refresh>
                    {move || if is_loading() { "Loading..." } else { "Refresh" }}
                </button>
            </header>

            <div class="summary-cards">
                {move || {
                    summary_cards(statistics.data.get().as_deref())
                        .into_iter()
                        .map(|card| view! { <SummaryCardView card=card /> })
                        .collect_view()
                }}
            </div>

            <div class="dashboard-charts">
                <section class="chart-card">
                    <h3>"Applications over time"</h3>
                    <LineChartView points=timeseries.data />
                </section>
                <section class="chart-card">
                    <h3>"Application stages"</h3>
                    <PieChart percents=percents.data />
                </section>
            </div>

            <TodoPanel />
        </div>
    }
}
