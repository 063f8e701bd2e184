//! Turnos - shift-to-calendar-date resolution
//!
//! Resolves recurring work shift ("turno") rules onto concrete calendar
//! dates. A shift applies to a day when the day's weekday index (1 = Monday
//! to 7 = Sunday) is in its weekday set and the day's week of the month
//! (`ceil(day / 7)`) is in its week set. The first matching definition in
//! input order wins.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and the source ports
//! - **Service Layer** (`services`): resolution, summaries, event filtering
//! - **Infrastructure Layer** (`infrastructure`): config, logging, REST client
//! - **Adapters** (`adapters`): local JSON file source
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use turnos::{ShiftDefinition, ShiftResolver};
//!
//! let shifts = vec![ShiftDefinition::new(1, "Oficina", "1,2,3,4,5", "1,2,3,4,5")];
//! let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let days = ShiftResolver::new().resolve(&shifts, [monday]);
//! assert_eq!(days.get(monday), Some(Some(&shifts[0])));
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::JsonFileSource;
pub use domain::models::{
    CalendarEvent, Config, EventScope, RecordId, RecurrenceSet, ResolvedAssignments,
    ShiftDefinition, ShiftId,
};
pub use domain::ports::{EventQuery, EventSource, ShiftQuery, ShiftSource, SourceError};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::api::{ApiClient, RetryPolicy};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    ClassifiedEvent, CurrentUser, DateRange, EventClassifier, EventFilter, ShiftResolver,
    ShiftSummary,
};
