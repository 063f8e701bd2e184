//! Infrastructure layer: configuration, logging and the REST adapter.

pub mod api;
pub mod config;
pub mod logging;
