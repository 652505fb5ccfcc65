//! # Tally TUI
//!
//! A terminal client for a server-persisted counter.
//!
//! ## Features
//! - Live count display synced with the counter API
//! - Increment / decrement / reset commands
//! - Action history panel (most recent first)
//! - Connection status indicator and error banner
//! - YAML config with env var override for the API address
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{ConnectionStatus, CounterAction, CounterOp, CounterValue, HistoryEntry};
pub use network::{ApiClient, NetworkActor};
