//! Query Layer
//!
//! Request deduplication and caching for remote data.

mod client;
mod hook;

pub use client::{QueryClient, QueryKey};
pub use hook::{use_query, QueryEpochs, QueryState};
