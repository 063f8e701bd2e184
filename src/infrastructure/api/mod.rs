//! REST API adapter for the shift-list and calendar endpoints
//!
//! - `ApiClient`: reqwest implementation of `ShiftSource` and `EventSource`
//! - `RetryPolicy`: exponential backoff over transient failures
//! - `decode_list`: bare-array or `{"data": [...]}` payload decoding

pub mod client;
pub mod payload;
pub mod retry;

pub use client::ApiClient;
pub use payload::decode_list;
pub use retry::RetryPolicy;
