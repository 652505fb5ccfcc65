//! App state - pure data structure with no I/O logic

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::{ConnectionStatus, HistoryEntry};

/// Main application state - pure data, no I/O
///
/// All mutation happens through the transition functions in `commands.rs`,
/// one per operation, so the whole state machine is testable without a
/// terminal or a network.
pub struct AppState {
    /// Last server-confirmed counter value
    pub count: i64,
    /// A counter call is in flight
    pub loading: bool,
    /// The initial load has settled (success or failure)
    pub load_settled: bool,
    /// Sticky message from the most recent failed counter call
    pub error: Option<String>,
    pub connection: ConnectionStatus,

    // History panel
    pub show_history: bool,
    pub history: Vec<HistoryEntry>,
    pub history_scroll: u16,
    pub history_limit: usize,

    // Popups
    pub show_help: bool,

    // Request bookkeeping: only the response matching `pending_counter`
    // is applied, so reordered or bypassing calls resolve latest-request-wins
    pub pending_counter: Option<u64>,
    pub next_request_id: u64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            count: 0,
            loading: false,
            load_settled: false,
            error: None,
            connection: ConnectionStatus::Connected,
            show_history: false,
            history: Vec::new(),
            history_scroll: 0,
            history_limit: config.history_limit,
            show_help: false,
            pending_counter: None,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for the UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            count: self.count,
            loading: self.loading,
            load_settled: self.load_settled,
            error: self.error.clone(),
            connection: self.connection,
            show_history: self.show_history,
            history: self.history.clone(),
            history_scroll: self.history_scroll,
            show_help: self.show_help,
        }
    }
}
