//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::ports::SourceError;

/// Report a failed command and exit with status 1.
///
/// In JSON mode the error goes to stdout as `{"error": ..., "retryable": ...}`
/// so scripted callers can parse it.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let retryable = is_retryable(&err);

    if json_mode {
        let value = serde_json::json!({
            "error": format!("{err:#}"),
            "retryable": retryable,
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
        if retryable {
            eprintln!("The backend could not be reached; try again in a moment.");
        }
    }

    std::process::exit(1)
}

/// Whether the error chain carries a transient source failure.
pub fn is_retryable(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<SourceError>())
        .any(SourceError::is_transient)
}
