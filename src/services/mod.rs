pub mod calendar;
pub mod event_classifier;
pub mod shift_resolver;
pub mod shift_summary;

pub use calendar::DateRange;
pub use event_classifier::{ClassifiedEvent, CurrentUser, EventClassifier, EventFilter};
pub use shift_resolver::ShiftResolver;
pub use shift_summary::{ShiftSummary, ShiftTotals};
