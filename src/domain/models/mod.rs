pub mod assignment;
pub mod calendar_event;
pub mod config;
pub mod ids;
mod lenient;
pub mod recurrence;
pub mod shift;

pub use assignment::ResolvedAssignments;
pub use calendar_event::{CalendarEvent, EventScope};
pub use config::{ApiConfig, Config, LoggingConfig};
pub use ids::RecordId;
pub use recurrence::RecurrenceSet;
pub use shift::{week_of_month, weekday_index, ShiftDefinition, ShiftId};
