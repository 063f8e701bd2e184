//! Domain layer for the Turnos shift calendar
//!
//! This module contains the core models, the recurrence matching rules
//! and the ports the infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
