//! REST API Client
//!
//! Bindings to the backend endpoints, organized by domain.

mod auth;
mod client;
mod dashboard;
mod resources;

pub use client::ApiClient;
pub use dashboard::TimeseriesWindow;
pub use resources::*;
