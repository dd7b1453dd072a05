//! Dashboard Endpoints
//!
//! Read-only aggregations computed by the backend.

use chrono::NaiveDate;

use crate::config::Interval;
use crate::error::AppResult;
use crate::models::{StagePercents, StatisticsSnapshot, TimeseriesPoint};
use crate::storage::KeyValueStore;

use super::client::ApiClient;

/// Query window for `/api/timeseries`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeseriesWindow {
    pub start_date: NaiveDate,
    pub points: u32,
    pub interval: Interval,
}

impl TimeseriesWindow {
    fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("points", self.points.to_string()),
            ("interval", self.interval.as_str().to_string()),
        ]
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn statistics(&self) -> AppResult<StatisticsSnapshot> {
        self.get_json("/api/statistics").await
    }

    pub async fn percents(&self) -> AppResult<StagePercents> {
        self.get_json("/api/percents").await
    }

    pub async fn timeseries(&self, window: &TimeseriesWindow) -> AppResult<Vec<TimeseriesPoint>> {
        self.get_json_with_query("/api/timeseries", &window.query_pairs())
            .await
    }
}
