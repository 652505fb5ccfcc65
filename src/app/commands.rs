//! Transition functions - business logic for processing UI events and
//! network responses, one discrete function per operation

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{ConnectionStatus, CounterOp};

impl AppState {
    // ========================
    // Counter operations
    // ========================

    /// Fetch the counter from the API (startup and manual refresh)
    pub fn start_load(&mut self) -> NetworkCommand {
        self.begin(CounterOp::Load)
    }

    pub fn start_increment(&mut self) -> NetworkCommand {
        self.begin(CounterOp::Increment)
    }

    pub fn start_decrement(&mut self) -> NetworkCommand {
        self.begin(CounterOp::Decrement)
    }

    pub fn start_reset(&mut self) -> NetworkCommand {
        self.begin(CounterOp::Reset)
    }

    fn begin(&mut self, op: CounterOp) -> NetworkCommand {
        let id = self.next_id();
        self.loading = true;
        self.pending_counter = Some(id);
        NetworkCommand::Counter { id, op }
    }

    // ========================
    // History
    // ========================

    /// Flip the history panel; transitioning to visible always re-fetches
    /// instead of reusing cached entries
    pub fn toggle_history(&mut self) -> Option<NetworkCommand> {
        self.show_history = !self.show_history;
        self.history_scroll = 0;

        if self.show_history {
            Some(self.request_history())
        } else {
            self.history.clear();
            None
        }
    }

    fn request_history(&mut self) -> NetworkCommand {
        let id = self.next_id();
        NetworkCommand::FetchHistory {
            id,
            limit: self.history_limit,
        }
    }

    pub fn history_scroll_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    pub fn history_scroll_down(&mut self) {
        self.history_scroll = self.history_scroll.saturating_add(1);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response; may return a follow-up command (the
    /// fire-and-forget history refresh after a successful write)
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::CounterOk { id, op, value, time_ms } => {
                if self.pending_counter != Some(id) {
                    tracing::debug!(id, op = op.as_str(), "Dropping stale counter response");
                    return None;
                }
                tracing::info!(id, op = op.as_str(), value, time_ms, "Counter call succeeded");

                self.count = value;
                self.error = None;
                self.connection = ConnectionStatus::Connected;
                self.finish_counter_call();

                if op.is_write() && self.show_history {
                    return Some(self.request_history());
                }
                None
            }
            NetworkResponse::CounterFailed { id, op, message, time_ms } => {
                if self.pending_counter != Some(id) {
                    tracing::debug!(id, op = op.as_str(), "Dropping stale counter failure");
                    return None;
                }
                tracing::info!(id, op = op.as_str(), time_ms, "Counter call failed");

                // Count keeps its prior value; only the error flag changes
                self.error = Some(message);
                self.connection = ConnectionStatus::Degraded;
                self.finish_counter_call();
                None
            }
            NetworkResponse::HistoryOk { id, entries } => {
                // Dropped when the panel was toggled off before arrival
                if self.show_history {
                    tracing::debug!(id, count = entries.len(), "History updated");
                    self.history = entries;
                    self.history_scroll = 0;
                } else {
                    tracing::debug!(id, "Dropping history for hidden panel");
                }
                None
            }
            NetworkResponse::HistoryFailed { id, message } => {
                // Non-critical: logged, never shown as the visible error
                tracing::warn!(id, %message, "History fetch failed");
                None
            }
        }
    }

    /// "Finally" contract: loading clears on completion regardless of outcome
    fn finish_counter_call(&mut self) {
        self.loading = false;
        self.load_settled = true;
        self.pending_counter = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{CounterAction, HistoryEntry};

    fn state() -> AppState {
        AppState::new(&Config::default())
    }

    fn pending_id(state: &AppState) -> u64 {
        state.pending_counter.expect("a counter call should be pending")
    }

    fn ok(id: u64, op: CounterOp, value: i64) -> NetworkResponse {
        NetworkResponse::CounterOk { id, op, value, time_ms: 5 }
    }

    fn failed(id: u64, op: CounterOp) -> NetworkResponse {
        NetworkResponse::CounterFailed {
            id,
            op,
            message: op.failure_message().to_string(),
            time_ms: 5,
        }
    }

    fn entry(id: i64, action: CounterAction, value: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            action,
            value,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_load_success_applies_server_value() {
        let mut state = state();
        let cmd = state.start_load();
        assert!(state.loading);
        assert!(matches!(cmd, NetworkCommand::Counter { op: CounterOp::Load, .. }));

        let follow_up = state.handle_response(ok(pending_id(&state), CounterOp::Load, 5));
        assert_eq!(follow_up, None);
        assert_eq!(state.count, 5);
        assert!(!state.loading);
        assert!(state.load_settled);
        assert_eq!(state.error, None);
        assert!(state.connection.is_connected());
    }

    #[test]
    fn test_load_failure_keeps_count_and_sets_error() {
        let mut state = state();
        state.start_load();
        state.handle_response(failed(pending_id(&state), CounterOp::Load));

        assert_eq!(state.count, 0);
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch counter. Make sure the API is running.")
        );
        assert!(!state.connection.is_connected());
    }

    #[test]
    fn test_client_never_computes_count_itself() {
        let mut state = state();
        state.start_load();
        state.handle_response(ok(pending_id(&state), CounterOp::Load, 10));

        // Server says 12 after an increment; the client applies it verbatim
        state.start_increment();
        state.handle_response(ok(pending_id(&state), CounterOp::Increment, 12));
        assert_eq!(state.count, 12);
    }

    #[test]
    fn test_reset_success_displays_zero() {
        let mut state = state();
        state.start_load();
        state.handle_response(ok(pending_id(&state), CounterOp::Load, 99));

        state.start_reset();
        state.handle_response(ok(pending_id(&state), CounterOp::Reset, 0));
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_loading_tracks_exactly_one_in_flight_call() {
        let mut state = state();
        assert!(!state.loading);

        state.start_increment();
        assert!(state.loading);

        state.handle_response(failed(pending_id(&state), CounterOp::Increment));
        assert!(!state.loading);
        assert_eq!(state.pending_counter, None);
    }

    #[test]
    fn test_error_clears_on_next_successful_call() {
        let mut state = state();
        state.start_decrement();
        state.handle_response(failed(pending_id(&state), CounterOp::Decrement));
        assert!(state.error.is_some());

        state.start_increment();
        state.handle_response(ok(pending_id(&state), CounterOp::Increment, 1));
        assert_eq!(state.error, None);
        assert!(state.connection.is_connected());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = state();
        state.start_increment();
        let first = pending_id(&state);

        // A second call supersedes the first; the late first response loses
        state.start_reset();
        let second = pending_id(&state);

        state.handle_response(ok(first, CounterOp::Increment, 7));
        assert_eq!(state.count, 0);
        assert!(state.loading);

        state.handle_response(ok(second, CounterOp::Reset, 0));
        assert_eq!(state.count, 0);
        assert!(!state.loading);
    }

    #[test]
    fn test_toggle_history_refetches_each_time() {
        let mut state = state();

        let first = state.toggle_history();
        assert!(state.show_history);
        assert!(matches!(&first, Some(NetworkCommand::FetchHistory { limit: 10, .. })));

        // Off: cached entries are dropped, nothing fetched
        state.history = vec![entry(1, CounterAction::Increment, 1)];
        assert_eq!(state.toggle_history(), None);
        assert!(state.history.is_empty());

        // Back on: a fresh fetch, never stale cache
        let second = state.toggle_history();
        assert!(matches!(&second, Some(NetworkCommand::FetchHistory { .. })));
        assert_ne!(first, second);
    }

    #[test]
    fn test_successful_write_refreshes_visible_history() {
        let mut state = state();
        state.toggle_history();

        state.start_increment();
        let follow_up = state.handle_response(ok(pending_id(&state), CounterOp::Increment, 1));
        assert!(matches!(follow_up, Some(NetworkCommand::FetchHistory { .. })));
    }

    #[test]
    fn test_no_history_refresh_when_panel_hidden_or_on_read() {
        let mut state = state();

        state.start_increment();
        let after_write = state.handle_response(ok(pending_id(&state), CounterOp::Increment, 1));
        assert_eq!(after_write, None);

        state.toggle_history();
        state.start_load();
        let after_read = state.handle_response(ok(pending_id(&state), CounterOp::Load, 1));
        assert_eq!(after_read, None);
    }

    #[test]
    fn test_history_arriving_after_toggle_off_is_dropped() {
        let mut state = state();
        state.toggle_history();
        state.toggle_history();

        state.handle_response(NetworkResponse::HistoryOk {
            id: 1,
            entries: vec![entry(1, CounterAction::Reset, 0)],
        });
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_history_failure_leaves_visible_state_untouched() {
        let mut state = state();
        state.toggle_history();

        state.handle_response(NetworkResponse::HistoryFailed {
            id: 9,
            message: String::from("Failed to fetch history: connection refused"),
        });
        assert_eq!(state.error, None);
        assert!(state.connection.is_connected());
    }

    #[test]
    fn test_full_session_scenario() {
        let mut state = state();

        // Initial load returns 5
        state.start_load();
        state.handle_response(ok(pending_id(&state), CounterOp::Load, 5));
        assert_eq!(state.count, 5);
        assert_eq!(state.error, None);

        // Increment returns 6
        state.start_increment();
        state.handle_response(ok(pending_id(&state), CounterOp::Increment, 6));
        assert_eq!(state.count, 6);

        // Decrement fails: count stays 6, decrement message shown
        state.start_decrement();
        state.handle_response(failed(pending_id(&state), CounterOp::Decrement));
        assert_eq!(state.count, 6);
        assert_eq!(state.error.as_deref(), Some("Failed to decrement counter"));

        // Reset succeeds with 0: count 0, error cleared
        state.start_reset();
        state.handle_response(ok(pending_id(&state), CounterOp::Reset, 0));
        assert_eq!(state.count, 0);
        assert_eq!(state.error, None);
    }
}
