//! Adapters for local data sources.

pub mod json_file;

pub use json_file::JsonFileSource;
