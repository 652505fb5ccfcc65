use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Operations the client can issue against the counter resource
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterOp {
    Load,
    Increment,
    Decrement,
    Reset,
}

impl CounterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterOp::Load => "load",
            CounterOp::Increment => "increment",
            CounterOp::Decrement => "decrement",
            CounterOp::Reset => "reset",
        }
    }

    /// Writes go through POST command endpoints; `Load` is a plain GET
    pub fn is_write(&self) -> bool {
        !matches!(self, CounterOp::Load)
    }

    /// Fixed user-facing message shown when this operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            CounterOp::Load => "Failed to fetch counter. Make sure the API is running.",
            CounterOp::Increment => "Failed to increment counter",
            CounterOp::Decrement => "Failed to decrement counter",
            CounterOp::Reset => "Failed to reset counter",
        }
    }
}

/// Connection health as seen by the last counter call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connected,
    Degraded,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Degraded => "Offline",
        }
    }
}

/// Wire payload returned by every counter read and write
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CounterValue {
    pub value: i64,
}

/// Mutation kind recorded in a history entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::Reset => "reset",
        }
    }
}

/// One audit record of a past counter mutation, produced by the server
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub action: CounterAction,
    /// Counter value after the action was applied
    pub value: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Wire payload of the history endpoint
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}
