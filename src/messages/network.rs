//! Network messages - communication between App and Network layers

use crate::models::{CounterOp, HistoryEntry};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Execute a counter read or write against the API
    Counter { id: u64, op: CounterOp },
    /// Fetch the most recent history entries
    FetchHistory { id: u64, limit: usize },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Counter call succeeded with the authoritative server value
    CounterOk {
        id: u64,
        op: CounterOp,
        value: i64,
        time_ms: u64,
    },
    /// Counter call failed; `message` is the fixed operation-specific text
    CounterFailed {
        id: u64,
        op: CounterOp,
        message: String,
        time_ms: u64,
    },
    /// History fetch succeeded, entries ordered most recent first
    HistoryOk { id: u64, entries: Vec<HistoryEntry> },
    /// History fetch failed (non-critical, logged only)
    HistoryFailed { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID the response belongs to
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::CounterOk { id, .. } => *id,
            NetworkResponse::CounterFailed { id, .. } => *id,
            NetworkResponse::HistoryOk { id, .. } => *id,
            NetworkResponse::HistoryFailed { id, .. } => *id,
        }
    }
}
