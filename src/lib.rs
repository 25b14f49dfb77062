//! This crate provides a small read-only HTTP API over a pre-computed dataset of per-country
//! energy statistics. It backs a front-end visualisation (map, pie chart, violin chart and bar
//! chart) with filtered and aggregated views of the data.
//!
//! The dataset is a JSON array of country objects, loaded once at startup into an immutable
//! [Dataset](dataset::Dataset). Every request is answered by the
//! [QueryEngine](queries::QueryEngine) against that same dataset. If loading fails the server
//! still starts, serving an empty dataset.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team, on top of the hyper HTTP library.
//! * [Serde](serde) performs (de)serialisation of the dataset and JSON responses.
//! * [Prometheus](prometheus) metrics and [tracing] for observability.

pub mod app;
pub mod app_state;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod models;
pub mod queries;
pub mod server;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
