//! Application Context
//!
//! Services shared with every view via the Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, TimeseriesWindow};
use crate::config::AppConfig;
use crate::session::{today_utc, SessionService};
use crate::storage::LocalStorage;

/// App-wide services
#[derive(Clone)]
pub struct AppContext {
    /// REST client; reads the token from localStorage on every call
    pub api: ApiClient<LocalStorage>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let session = SessionService::new(LocalStorage);
        Self {
            api: ApiClient::new(config.api_base_url.clone(), session),
            config,
        }
    }

    pub fn session(&self) -> &SessionService<LocalStorage> {
        self.api.session()
    }

    /// Chart window starting at the first-login stamp
    pub fn timeseries_window(&self) -> TimeseriesWindow {
        TimeseriesWindow {
            start_date: self.session().start_date().unwrap_or_else(today_utc),
            points: self.config.timeseries_points,
            interval: self.config.timeseries_interval,
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
