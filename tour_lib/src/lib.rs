//! Caller-side layer for the tour API client: configuration loading,
//! logging setup, and dashboard statistics built from fanned-out client calls.

pub mod config;
pub mod logging;
pub mod stats;

pub use tour_api;
pub use tour_api::types;
pub use tour_api::{
    AreaBasedListQuery, AreaCodeQuery, Client, ClientConfig, Error, FilterQuery, KeywordQuery,
    Query, RetryPolicy,
};

pub use stats::{region_stats, stats_summary, type_stats, RegionCount, StatsSummary, TypeCount};
