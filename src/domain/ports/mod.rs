//! Port trait definitions (Hexagonal Architecture)
//!
//! Async interfaces the infrastructure adapters implement:
//! - ShiftSource: the shift-list endpoint
//! - EventSource: the calendar events endpoint
//!
//! Services only see these traits, so the resolver and classifier never
//! depend on HTTP or file I/O.

pub mod errors;
pub mod event_source;
pub mod shift_source;

pub use errors::{SourceError, SourceResult};
pub use event_source::{EventQuery, EventSource};
pub use shift_source::{ShiftQuery, ShiftSource};
