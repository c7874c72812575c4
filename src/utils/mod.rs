//! Utility helpers: tracing setup and per-app filesystem paths.

pub mod app_paths;
pub mod logging;
