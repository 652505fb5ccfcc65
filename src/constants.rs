//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the counter API (local development address)
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Name of the counter resource this client tracks
pub const COUNTER_NAME: &str = "main";

/// Default number of history entries requested from the API
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Application name
pub const APP_NAME: &str = "Tally TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
